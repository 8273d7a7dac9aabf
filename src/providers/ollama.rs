use super::http_client::build_provider_client_with_timeout;
use super::scrub::api_error;
use super::traits::{Provider, ProviderFuture};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Local models served by `ollama serve`.
pub struct OllamaProvider {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    options: Options,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Options {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaProvider {
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or("http://localhost:11434")
                .trim_end_matches('/')
                .to_string(),
            // Local models can be slow on first load.
            client: build_provider_client_with_timeout(300),
        }
    }

    fn build_request(prompt: &str, model: &str, temperature: f64) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "system",
                content: prompt.to_string(),
            }],
            stream: false,
            options: Options { temperature },
        }
    }
}

impl Provider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a, String> {
        Box::pin(async move {
            let request = Self::build_request(prompt, model, temperature);
            let url = format!("{}/api/chat", self.base_url);

            let response = self.client.post(&url).json(&request).send().await?;
            if !response.status().is_success() {
                let err = api_error("Ollama", response).await;
                anyhow::bail!("{err}. Is Ollama running? (ollama serve)");
            }

            let chat: ChatResponse = response.json().await?;
            Ok(chat.message.content)
        })
    }
}
