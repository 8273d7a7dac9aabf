//! Generic OpenAI-compatible provider.
//! OpenAI, Groq and OpenRouter all accept the same `/chat/completions` body,
//! so one implementation serves every hosted backend the bot supports.

use super::http_client::build_provider_client;
use super::scrub::sanitize_api_error;
use super::traits::{Provider, ProviderFuture};
use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct OpenAiCompatibleProvider {
    pub(crate) name: String,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    /// Pre-computed `"Bearer <key>"` header value.
    cached_auth_header: Option<String>,
    /// Pre-computed chat completions URL.
    cached_chat_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleProvider {
    pub fn new(name: &str, base_url: &str, api_key: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let cached_chat_url = if base_url.ends_with("chat/completions") {
            base_url.clone()
        } else {
            format!("{base_url}/chat/completions")
        };

        Self {
            name: name.to_string(),
            base_url,
            api_key: api_key.map(ToString::to_string),
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            cached_chat_url,
            client: build_provider_client(),
        }
    }

    fn build_request(prompt: &str, model: &str, temperature: f64) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "system",
                content: prompt.to_string(),
            }],
            temperature,
        }
    }

    async fn call_chat_completions(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let Some(auth) = &self.cached_auth_header else {
            anyhow::bail!(
                "{} API key not set. Set it in ~/.jokebot/config.toml or the provider's env var.",
                self.name
            );
        };

        let response = self
            .client
            .post(&self.cached_chat_url)
            .header("Authorization", auth)
            .json(request)
            .send()
            .await
            .with_context(|| format!("{} chat completions request failed", self.name))?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "{} API error ({status}): {}",
                self.name,
                sanitize_api_error(&error)
            );
        }

        response
            .json()
            .await
            .with_context(|| format!("{} chat completions JSON decode failed", self.name))
    }
}

fn extract_chat_text(response: ChatResponse, provider_name: &str) -> anyhow::Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| anyhow::anyhow!("No response from {provider_name}"))
}

impl Provider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a, String> {
        Box::pin(async move {
            let request = Self::build_request(prompt, model, temperature);
            let response = self.call_chat_completions(&request).await?;
            extract_chat_text(response, &self.name)
        })
    }
}
