use std::sync::Arc;

use crate::error::{JokeBotError, LlmError};
use crate::prompt::PromptTemplates;
use crate::providers::TextCompletion;
use crate::state::{Category, Language};

/// Produces joke drafts from the `write_joke` prompt.
pub struct GenerativeWriter {
    completion: TextCompletion,
    templates: Arc<PromptTemplates>,
}

impl GenerativeWriter {
    pub fn new(completion: TextCompletion, templates: Arc<PromptTemplates>) -> Self {
        Self {
            completion,
            templates,
        }
    }

    pub fn completion(&self) -> &TextCompletion {
        &self.completion
    }

    pub async fn draft(&self, category: Category, language: Language) -> Result<String, JokeBotError> {
        let prompt = self.templates.write_joke(category, language)?;
        self.completion
            .complete(&prompt)
            .await
            .map_err(|e| request_error(&self.completion, e))
    }
}

/// Keep a typed `LlmError` from the provider chain; wrap anything else.
pub(crate) fn request_error(completion: &TextCompletion, err: anyhow::Error) -> JokeBotError {
    match err.downcast::<LlmError>() {
        Ok(llm) => JokeBotError::Llm(llm),
        Err(err) => JokeBotError::Llm(LlmError::Request {
            provider: completion.provider_name().to_string(),
            message: format!("{err:#}"),
        }),
    }
}
