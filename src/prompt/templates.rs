use super::engine::TeraEngine;
use crate::error::PromptError;
use crate::state::{Category, Language};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tera::Context;

pub const WRITE_JOKE: &str = "write_joke";
pub const EVALUATE_JOKE: &str = "evaluate_joke";

const PREAMBLE_NAME: &str = "__preamble";

const PREAMBLE_TEMPLATE: &str = "\
Role: {{ role }}\n\
Goal: {{ goal }}\n\
{% if instructions %}Instructions:\n{% for item in instructions %}- {{ item }}\n{% endfor %}{% endif %}\
{% if output_constraints %}Output Constraints:\n{% for item in output_constraints %}- {{ item }}\n{% endfor %}{% endif %}\
{% if style_or_tone %}Style/Tone:\n{% for item in style_or_tone %}- {{ item }}\n{% endfor %}{% endif %}";

const WRITE_JOKE_TAIL: &str = "Write a joke in {{ language }} about {{ category }}.\n";

const EVALUATE_JOKE_TAIL: &str = "\
Joke to evaluate: {{ joke }}\n\
Category: {{ category }}, Language: {{ language }}\n\
Respond only with 'approve' or 'reject'.\n";

/// One prompt task: the structured preamble plus a task-specific tail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskSpec {
    pub role: String,
    pub goal: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub output_constraints: Vec<String>,
    #[serde(default)]
    pub style_or_tone: Vec<String>,
    /// Tera template appended after the preamble.
    #[serde(default)]
    pub template: Option<String>,
}

fn builtin_specs() -> BTreeMap<String, TaskSpec> {
    let write = TaskSpec {
        role: "You are a stand-up comedian who writes short jokes for programmers.".into(),
        goal: "Write one original joke for the requested category and language.".into(),
        instructions: vec![
            "Write the joke entirely in the requested language.".into(),
            "Stay on the requested topic.".into(),
            "Do not repeat well-known jokes word for word.".into(),
        ],
        output_constraints: vec![
            "Return only the joke text.".into(),
            "No more than three sentences.".into(),
            "No preamble, explanation or quotes.".into(),
        ],
        style_or_tone: vec!["Witty and light-hearted.".into(), "Safe for work.".into()],
        template: Some(WRITE_JOKE_TAIL.into()),
    };
    let evaluate = TaskSpec {
        role: "You are a strict comedy editor.".into(),
        goal: "Decide whether a joke is good enough to show to the audience.".into(),
        instructions: vec![
            "Reject jokes that are offensive, off-topic or not funny.".into(),
            "Reject jokes written in a different language than requested.".into(),
            "Approve jokes that are clever and fit the category.".into(),
        ],
        output_constraints: vec!["Answer with a single word.".into()],
        style_or_tone: vec!["Decisive.".into()],
        template: Some(EVALUATE_JOKE_TAIL.into()),
    };
    BTreeMap::from([(WRITE_JOKE.to_string(), write), (EVALUATE_JOKE.to_string(), evaluate)])
}

/// Registry of prompt tasks rendered through Tera.
pub struct PromptTemplates {
    engine: TeraEngine,
    specs: BTreeMap<String, TaskSpec>,
}

impl PromptTemplates {
    /// The built-in `write_joke` and `evaluate_joke` tasks.
    pub fn builtin() -> Result<Self, PromptError> {
        Self::from_specs(builtin_specs())
    }

    /// Built-ins, overridden or extended by the TOML file at `path`.
    ///
    /// An override that omits `template` keeps the built-in tail.
    pub fn load(path: Option<&Path>) -> Result<Self, PromptError> {
        let mut specs = builtin_specs();
        if let Some(path) = path {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| PromptError::Load(format!("{}: {e}", path.display())))?;
            let overrides: BTreeMap<String, TaskSpec> = toml::from_str(&contents)
                .map_err(|e| PromptError::Load(format!("{}: {e}", path.display())))?;
            for (task, mut spec) in overrides {
                if spec.template.is_none()
                    && let Some(existing) = specs.get(&task)
                {
                    spec.template.clone_from(&existing.template);
                }
                tracing::debug!(task = %task, "Prompt task overridden");
                specs.insert(task, spec);
            }
        }
        Self::from_specs(specs)
    }

    fn from_specs(specs: BTreeMap<String, TaskSpec>) -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(PREAMBLE_NAME, PREAMBLE_TEMPLATE)?;
        for (task, spec) in &specs {
            engine.add_template(task, spec.template.as_deref().unwrap_or_default())?;
        }
        Ok(Self { engine, specs })
    }

    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Render both joke tasks once with sample values, so a missing task or
    /// a broken template surfaces at startup.
    pub fn validate(&self) -> Result<(), PromptError> {
        self.write_joke(Category::default(), Language::default())?;
        self.evaluate_joke("sample joke", Category::default(), Language::default())?;
        Ok(())
    }

    /// Render `task` with the given template fields.
    pub fn render(&self, task: &str, fields: &Context) -> Result<String, PromptError> {
        let spec = self
            .specs
            .get(task)
            .ok_or_else(|| PromptError::UnknownTask(task.to_string()))?;

        let mut ctx = Context::new();
        ctx.insert("role", &spec.role);
        ctx.insert("goal", &spec.goal);
        ctx.insert("instructions", &spec.instructions);
        ctx.insert("output_constraints", &spec.output_constraints);
        ctx.insert("style_or_tone", &spec.style_or_tone);

        let mut prompt = self.engine.render(PREAMBLE_NAME, &ctx)?;
        prompt.push_str(&self.engine.render(task, fields)?);
        Ok(prompt)
    }

    pub fn write_joke(&self, category: Category, language: Language) -> Result<String, PromptError> {
        let mut fields = Context::new();
        fields.insert("category", category.topic());
        fields.insert("language", language.display_name());
        self.render(WRITE_JOKE, &fields)
    }

    pub fn evaluate_joke(
        &self,
        joke: &str,
        category: Category,
        language: Language,
    ) -> Result<String, PromptError> {
        let mut fields = Context::new();
        fields.insert("joke", joke);
        fields.insert("category", &category.to_string());
        fields.insert("language", &language.to_string());
        self.render(EVALUATE_JOKE, &fields)
    }
}
