pub mod embedding;
pub mod fallback;
pub mod lexical;
pub mod traits;
pub mod vector;

pub use embedding::EmbeddingScorer;
pub use fallback::FallbackScorer;
pub use lexical::LexicalScorer;
pub use traits::SimilarityScorer;
pub use vector::cosine_similarity;

use crate::config::{SimilarityBackend, SimilarityConfig};

// ── Factory ──────────────────────────────────────────────────

/// Build the scorer for the novelty gate.
///
/// The embedding backend always degrades to the lexical scorer so an
/// unreachable embedding service never ends the session.
pub fn create_scorer(config: &SimilarityConfig, api_key: Option<&str>) -> Box<dyn SimilarityScorer> {
    match config.backend {
        SimilarityBackend::Lexical => Box::new(LexicalScorer),
        SimilarityBackend::Embedding => {
            let key = api_key
                .map(ToString::to_string)
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .filter(|k| !k.trim().is_empty());
            Box::new(FallbackScorer::new(
                Box::new(EmbeddingScorer::new(
                    &config.base_url,
                    key.as_deref(),
                    &config.model,
                )),
                Box::new(LexicalScorer),
            ))
        }
    }
}
