use super::traits::{Provider, ProviderFuture};
use crate::error::LlmError;
use std::time::Duration;

const MAX_BACKOFF_MS: u64 = 10_000;

/// Check if an error is non-retryable (client errors that won't resolve with retries).
fn is_non_retryable(err: &anyhow::Error) -> bool {
    let msg = err.to_string();
    if is_quota_exhausted(&msg) || msg.contains("API key not set") {
        return true;
    }

    if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>()
        && let Some(status) = reqwest_err.status()
    {
        let code = status.as_u16();
        // 429 and 408 are transient; every other 4xx is the caller's fault.
        return status.is_client_error() && code != 429 && code != 408;
    }

    // String fallback: providers format the status into the message.
    for word in msg.split(|c: char| !c.is_ascii_digit()) {
        if let Ok(code) = word.parse::<u16>()
            && (400..500).contains(&code)
        {
            return code != 429 && code != 408;
        }
    }
    false
}

fn is_quota_exhausted(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("insufficient_quota")
        || lower.contains("exceeded your current quota")
        || lower.contains("billing")
}

/// One link of the chain. `model` replaces the caller's model for this
/// provider only.
struct ChainLink {
    provider: Box<dyn Provider>,
    model: Option<String>,
}

/// Provider wrapper with retry + fallback behavior.
///
/// Each provider is tried up to `max_retries + 1` times with exponential
/// backoff before the next one in the chain is used. The call fails with
/// `LlmError::Exhausted` only once every provider has been exhausted.
pub struct ReliableProvider {
    providers: Vec<ChainLink>,
    max_retries: u32,
    base_backoff_ms: u64,
}

impl ReliableProvider {
    pub fn new(providers: Vec<Box<dyn Provider>>, max_retries: u32, base_backoff_ms: u64) -> Self {
        Self {
            providers: providers
                .into_iter()
                .map(|provider| ChainLink {
                    provider,
                    model: None,
                })
                .collect(),
            max_retries,
            base_backoff_ms,
        }
    }

    /// Append a fallback that is sent `model` instead of the caller's.
    #[must_use]
    pub fn with_fallback(mut self, provider: Box<dyn Provider>, model: Option<String>) -> Self {
        self.providers.push(ChainLink { provider, model });
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|l| l.provider.name()).collect()
    }
}

impl Provider for ReliableProvider {
    fn name(&self) -> &str {
        self.providers.first().map_or("reliable", |l| l.provider.name())
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a, String> {
        Box::pin(async move {
            let mut failures = Vec::new();

            for link in &self.providers {
                let provider = &link.provider;
                let provider_name = provider.name();
                let model = link.model.as_deref().unwrap_or(model);
                let mut backoff_ms = self.base_backoff_ms;

                for attempt in 0..=self.max_retries {
                    match provider.complete(prompt, model, temperature).await {
                        Ok(text) => {
                            if attempt > 0 {
                                tracing::info!(
                                    provider = provider_name,
                                    model,
                                    attempt,
                                    "Provider recovered after retries"
                                );
                            }
                            return Ok(text);
                        }
                        Err(e) => {
                            let non_retryable = is_non_retryable(&e);
                            failures.push(format!(
                                "{provider_name} attempt {}/{}: {e}",
                                attempt + 1,
                                self.max_retries + 1
                            ));

                            if non_retryable {
                                tracing::warn!(
                                    provider = provider_name,
                                    "Non-retryable error, switching provider"
                                );
                                break;
                            }

                            if attempt < self.max_retries {
                                tracing::warn!(
                                    provider = provider_name,
                                    attempt = attempt + 1,
                                    max_retries = self.max_retries,
                                    "Provider call failed, retrying"
                                );
                                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                                backoff_ms = backoff_ms.saturating_mul(2).min(MAX_BACKOFF_MS);
                            }
                        }
                    }
                }

                tracing::warn!(provider = provider_name, "Switching to fallback provider");
            }

            Err(anyhow::Error::from(LlmError::Exhausted(failures.join("\n"))))
        })
    }
}
