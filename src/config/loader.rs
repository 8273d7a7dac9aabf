use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// `~/.jokebot/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let home = UserDirs::new()
        .map(|u| u.home_dir().to_path_buf())
        .context("Could not find home directory")?;
    Ok(home.join(".jokebot").join("config.toml"))
}

impl Config {
    /// Load the config at `path` (or the default location), writing a fresh
    /// default file if none exists yet. Env overrides are applied last.
    pub fn load_or_init(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path()?,
        };

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config
        } else {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %config_path.display(), "Wrote default config");
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.max_retries == 0 {
            return Err(ConfigError::Validation(
                "generation.max_retries must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.generation.similarity_threshold) {
            return Err(ConfigError::Validation(format!(
                "generation.similarity_threshold must be within 0.0..=1.0 (got {})",
                self.generation.similarity_threshold
            )));
        }
        for (role, writer) in [("writer", &self.writer), ("critic", &self.critic)] {
            if !(0.0..=2.0).contains(&writer.temperature) {
                return Err(ConfigError::Validation(format!(
                    "{role}.temperature must be within 0.0..=2.0 (got {})",
                    writer.temperature
                )));
            }
            if writer.model.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{role}.model is empty")));
            }
        }
        for fallback in &self.reliability.fallback_providers {
            if fallback.provider.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "reliability.fallback_providers entry has no provider".into(),
                ));
            }
            if fallback.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "reliability.fallback_providers: model for {} is empty",
                    fallback.provider
                )));
            }
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "observability.log_level must be one of {LOG_LEVELS:?}"
            )));
        }
        Ok(())
    }
}
