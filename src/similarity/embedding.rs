use std::time::Duration;

use super::traits::SimilarityScorer;
use super::vector::cosine_similarity;
use crate::providers::{ProviderFuture, sanitize_api_error};

// ── OpenAI-compatible embedding scorer ───────────────────────

/// Embeds the draft together with every prior joke in one request and
/// compares them by cosine similarity.
pub struct EmbeddingScorer {
    client: reqwest::Client,
    cached_embeddings_url: String,
    cached_auth_header: Option<String>,
    model: String,
}

impl EmbeddingScorer {
    pub fn new(base_url: &str, api_key: Option<&str>, model: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            cached_embeddings_url: format!("{base}/embeddings"),
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            model: model.to_string(),
        }
    }

    /// Embed a batch of texts into vectors.
    pub async fn embed(&self, texts: &[&str]) -> anyhow::Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let Some(auth) = &self.cached_auth_header else {
            anyhow::bail!("Embedding API key not set");
        };

        let body = serde_json::json!({
            "model": self.model,
            "input": texts,
        });

        let resp = self
            .client
            .post(&self.cached_embeddings_url)
            .header("Authorization", auth)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Embedding HTTP request failed: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Embedding API error {status}: {}", sanitize_api_error(&text));
        }

        let json: serde_json::Value = resp.json().await?;
        let data = json
            .get("data")
            .and_then(|d| d.as_array())
            .ok_or_else(|| anyhow::anyhow!("Invalid embedding response: missing 'data'"))?;

        let mut embeddings = Vec::with_capacity(data.len());
        for item in data {
            let embedding = item
                .get("embedding")
                .and_then(|e| e.as_array())
                .ok_or_else(|| anyhow::anyhow!("Invalid embedding item"))?;

            #[allow(clippy::cast_possible_truncation)]
            let vec: Vec<f32> = embedding
                .iter()
                .filter_map(|v| v.as_f64().map(|f| f as f32))
                .collect();

            embeddings.push(vec);
        }

        if embeddings.len() != texts.len() {
            anyhow::bail!(
                "Embedding API returned {} vectors for {} inputs",
                embeddings.len(),
                texts.len()
            );
        }
        Ok(embeddings)
    }
}

impl SimilarityScorer for EmbeddingScorer {
    fn name(&self) -> &str {
        "embedding"
    }

    fn similarity<'a>(&'a self, text: &'a str, others: &'a [&'a str]) -> ProviderFuture<'a, Vec<f64>> {
        Box::pin(async move {
            if others.is_empty() {
                return Ok(Vec::new());
            }

            let mut batch = Vec::with_capacity(others.len() + 1);
            batch.push(text);
            batch.extend_from_slice(others);

            let vectors = self.embed(&batch).await?;
            let (draft, rest) = vectors
                .split_first()
                .ok_or_else(|| anyhow::anyhow!("Empty embedding result"))?;
            Ok(rest.iter().map(|v| cosine_similarity(draft, v)).collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn scores_draft_against_each_prior() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"embedding": [1.0, 0.0]},
                    {"embedding": [1.0, 0.0]},
                    {"embedding": [0.0, 1.0]}
                ]
            })))
            .mount(&server)
            .await;

        let scorer = EmbeddingScorer::new(
            &format!("{}/v1", server.uri()),
            Some("key"),
            "text-embedding-3-small",
        );
        let scores = scorer
            .similarity("draft", &["same", "different"])
            .await
            .unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-9);
        assert!(scores[1].abs() < 1e-9);
    }

    #[tokio::test]
    async fn no_priors_makes_no_request() {
        let scorer = EmbeddingScorer::new("http://127.0.0.1:9", None, "m");
        assert!(scorer.similarity("draft", &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_key_is_an_error() {
        let scorer = EmbeddingScorer::new("http://127.0.0.1:9", None, "m");
        assert!(scorer.similarity("draft", &["prior"]).await.is_err());
    }

    #[tokio::test]
    async fn vector_count_mismatch_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"embedding": [1.0]}]
            })))
            .mount(&server)
            .await;

        let scorer = EmbeddingScorer::new(&server.uri(), Some("key"), "m");
        assert!(scorer.similarity("draft", &["prior"]).await.is_err());
    }
}
