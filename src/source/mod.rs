pub mod critic;
pub mod phrases;
pub mod writer;

pub use critic::{CriticReviewer, Verdict, is_approval};
pub use phrases::{BuiltinPhrases, PhraseLibrary};
pub use writer::GenerativeWriter;

use std::sync::Arc;

use crate::config::{Config, SourceKind, WriterConfig};
use crate::error::LlmError;
use crate::prompt::PromptTemplates;
use crate::providers::{Provider, TextCompletion, create_resilient_provider};
use crate::similarity::create_scorer;

/// Where the jokes of a session come from.
pub enum JokeSource {
    Static(Box<dyn PhraseLibrary>),
    Generative {
        writer: GenerativeWriter,
        critic: CriticReviewer,
    },
}

impl JokeSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Static(_) => SourceKind::Static,
            Self::Generative { .. } => SourceKind::Generative,
        }
    }

    /// Built-in phrase tables.
    pub fn builtin() -> Self {
        Self::Static(Box::new(BuiltinPhrases))
    }

    /// Build the source selected by `config`.
    ///
    /// For the generative source the prompt tasks are checked up front, so a
    /// broken prompt file fails at startup instead of on the first joke.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.source {
            SourceKind::Static => Ok(Self::builtin()),
            SourceKind::Generative => {
                let templates = PromptTemplates::load(config.prompts.path.as_deref())?;
                templates.validate()?;
                let templates = Arc::new(templates);

                let writer = completion_for(config, &config.writer)?;
                let critic = completion_for(config, &config.critic)?;
                tracing::info!(
                    writer = writer.provider_name(),
                    critic = critic.provider_name(),
                    "Generative source ready"
                );

                Ok(Self::Generative {
                    writer: GenerativeWriter::new(writer, Arc::clone(&templates)),
                    critic: CriticReviewer::new(
                        create_scorer(&config.similarity, config.api_key.as_deref()),
                        critic,
                        templates,
                        config.generation.similarity_threshold,
                    ),
                })
            }
        }
    }
}

fn completion_for(config: &Config, role: &WriterConfig) -> Result<TextCompletion, LlmError> {
    let name = role.provider.as_deref().unwrap_or(&config.default_provider);
    let reliable = create_resilient_provider(name, config.api_key.as_deref(), &config.reliability)?;
    tracing::debug!(chain = ?reliable.provider_names(), model = role.model.as_str(), "Provider chain");
    let provider: Arc<dyn Provider> = Arc::new(reliable);
    Ok(TextCompletion::new(provider, role.model.clone(), role.temperature))
}
