use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SourceKind};

/// `Jokebot` - an interactive joke teller for the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "jokebot")]
#[command(author = "theonlyhennygod")]
#[command(version)]
#[command(about = "Tell jokes from built-in tables or an LLM writer/critic pair.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.jokebot/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Joke source (static, generative)
    #[arg(short, long)]
    pub source: Option<SourceKind>,

    /// Provider for the writer and critic (openai, groq, openrouter, ollama, custom:<url>)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model for the writer and critic
    #[arg(long)]
    pub model: Option<String>,

    /// Write attempts per joke before the last draft is shown anyway
    #[arg(long)]
    pub max_retries: Option<u32>,
}

impl Cli {
    /// Flags win over the config file and the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(provider) = &self.provider {
            config.default_provider.clone_from(provider);
            config.writer.provider = None;
            config.critic.provider = None;
        }
        if let Some(model) = &self.model {
            config.writer.model.clone_from(model);
            config.critic.model.clone_from(model);
        }
        if let Some(max_retries) = self.max_retries {
            config.generation.max_retries = max_retries;
        }
    }
}
