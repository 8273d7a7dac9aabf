use super::{Config, SourceKind};
use std::str::FromStr;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("JOKEBOT_API_KEY")
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(provider) = std::env::var("JOKEBOT_PROVIDER")
            && !provider.is_empty()
        {
            self.default_provider = provider;
        }

        if let Ok(model) = std::env::var("JOKEBOT_MODEL")
            && !model.is_empty()
        {
            self.writer.model.clone_from(&model);
            self.critic.model = model;
        }

        if let Ok(source) = std::env::var("JOKEBOT_SOURCE")
            && let Ok(source) = SourceKind::from_str(source.trim())
        {
            self.source = source;
        }

        if let Ok(retries) = std::env::var("JOKEBOT_MAX_RETRIES")
            && let Ok(retries) = retries.trim().parse::<u32>()
        {
            self.generation.max_retries = retries;
        }

        if let Ok(level) = std::env::var("JOKEBOT_LOG")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}
