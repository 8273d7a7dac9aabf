use super::compatible::OpenAiCompatibleProvider;
use super::ollama::OllamaProvider;
use super::reliable::ReliableProvider;
use super::traits::Provider;
use crate::config::ReliabilityConfig;
use crate::error::LlmError;

/// Resolve API key for a provider from config and environment variables.
///
/// Resolution order:
/// 1. Explicitly provided `api_key` parameter (trimmed, filtered if empty)
/// 2. Provider-specific environment variable (e.g., `GROQ_API_KEY`)
/// 3. Generic fallback variables (`JOKEBOT_API_KEY`, `API_KEY`)
fn resolve_api_key(name: &str, explicit_api_key: Option<&str>) -> Option<String> {
    if let Some(key) = explicit_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    let provider_env: &[&str] = match name {
        "openai" => &["OPENAI_API_KEY"],
        "groq" => &["GROQ_API_KEY"],
        "openrouter" => &["OPENROUTER_API_KEY"],
        _ => &[],
    };

    provider_env
        .iter()
        .chain(["JOKEBOT_API_KEY", "API_KEY"].iter())
        .find_map(|var| {
            std::env::var(var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

pub fn create_provider(name: &str, api_key: Option<&str>) -> Result<Box<dyn Provider>, LlmError> {
    // The configured key belongs to the default provider; fallbacks resolve
    // their own from the environment.
    let resolved_key = resolve_api_key(name, api_key);
    let key = resolved_key.as_deref();

    match name {
        "openai" => Ok(Box::new(OpenAiCompatibleProvider::new(
            "openai",
            "https://api.openai.com/v1",
            key,
        ))),
        "groq" => Ok(Box::new(OpenAiCompatibleProvider::new(
            "groq",
            "https://api.groq.com/openai/v1",
            key,
        ))),
        "openrouter" => Ok(Box::new(OpenAiCompatibleProvider::new(
            "openrouter",
            "https://openrouter.ai/api/v1",
            key,
        ))),
        "ollama" => Ok(Box::new(OllamaProvider::new(None))),
        name if name.starts_with("custom:") => {
            let base_url = name.trim_start_matches("custom:");
            if base_url.is_empty() {
                return Err(LlmError::UnknownProvider(name.to_string()));
            }
            Ok(Box::new(OpenAiCompatibleProvider::new("custom", base_url, key)))
        }
        _ => Err(LlmError::UnknownProvider(name.to_string())),
    }
}

/// Build the primary provider wrapped in retry + fallback handling.
///
/// Each fallback keeps its own model and key. A fallback naming the primary
/// without a different model adds nothing and is skipped. Unknown fallback
/// names are skipped with a warning; an unknown primary is an error.
pub fn create_resilient_provider(
    primary: &str,
    api_key: Option<&str>,
    reliability: &ReliabilityConfig,
) -> Result<ReliableProvider, LlmError> {
    let mut reliable = ReliableProvider::new(
        vec![create_provider(primary, api_key)?],
        reliability.provider_retries,
        reliability.provider_backoff_ms,
    );

    for fallback in &reliability.fallback_providers {
        if fallback.provider == primary && fallback.model.is_none() {
            continue;
        }
        match create_provider(&fallback.provider, fallback.api_key.as_deref()) {
            Ok(provider) => reliable = reliable.with_fallback(provider, fallback.model.clone()),
            Err(e) => tracing::warn!(
                fallback = fallback.provider.as_str(),
                "Ignoring fallback provider: {e}"
            ),
        }
    }

    Ok(reliable)
}
