use crate::error::PromptError;
use tera::Tera;

/// Tera-backed template engine for the LLM prompts.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create with inline templates (no filesystem).
    pub fn new() -> Self {
        let mut tera = Tera::default();
        // Prompts are plain text; HTML escaping would mangle quotes in jokes.
        tera.autoescape_on(vec![]);
        Self { tera }
    }

    /// Register a template from a string, replacing any previous one.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| PromptError::Load(format!("template '{name}': {e}")))
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, PromptError> {
        self.tera
            .render(name, context)
            .map_err(|e| PromptError::Render(format!("template '{name}': {e}")))
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}
