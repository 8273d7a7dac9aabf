use std::sync::Arc;

use super::traits::Provider;

/// A provider bound to one model and temperature.
///
/// The writer and the critic each own one, so they can run on different
/// models with different sampling temperatures.
#[derive(Clone)]
pub struct TextCompletion {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f64,
}

impl TextCompletion {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run `prompt` and return the reply with surrounding whitespace removed.
    pub async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        tracing::debug!(
            provider = self.provider.name(),
            model = self.model.as_str(),
            temperature = self.temperature,
            "Requesting completion"
        );
        let text = self
            .provider
            .complete(prompt, &self.model, self.temperature)
            .await?;
        Ok(text.trim().to_string())
    }
}

impl std::fmt::Debug for TextCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCompletion")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}
