use super::traits::SimilarityScorer;
use crate::providers::ProviderFuture;

/// Uses `primary` and degrades to `secondary` when it fails.
pub struct FallbackScorer {
    primary: Box<dyn SimilarityScorer>,
    secondary: Box<dyn SimilarityScorer>,
}

impl FallbackScorer {
    pub fn new(primary: Box<dyn SimilarityScorer>, secondary: Box<dyn SimilarityScorer>) -> Self {
        Self { primary, secondary }
    }
}

impl SimilarityScorer for FallbackScorer {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn similarity<'a>(&'a self, text: &'a str, others: &'a [&'a str]) -> ProviderFuture<'a, Vec<f64>> {
        Box::pin(async move {
            match self.primary.similarity(text, others).await {
                Ok(scores) => Ok(scores),
                Err(e) => {
                    tracing::warn!(
                        primary = self.primary.name(),
                        secondary = self.secondary.name(),
                        "Similarity scorer failed, degrading: {e}"
                    );
                    self.secondary.similarity(text, others).await
                }
            }
        })
    }
}
