use crate::providers::ProviderFuture;

/// Scores how alike a draft is to earlier texts.
pub trait SimilarityScorer: Send + Sync {
    fn name(&self) -> &str;

    /// One score in `[0, 1]` per entry of `others`, in the same order.
    fn similarity<'a>(&'a self, text: &'a str, others: &'a [&'a str]) -> ProviderFuture<'a, Vec<f64>>;

    /// Highest score against `others`, or `0.0` when there is nothing to compare.
    fn max_similarity<'a>(&'a self, text: &'a str, others: &'a [&'a str]) -> ProviderFuture<'a, f64> {
        Box::pin(async move {
            if others.is_empty() {
                return Ok(0.0);
            }
            let scores = self.similarity(text, others).await?;
            Ok(scores
                .into_iter()
                .map(|s| s.clamp(0.0, 1.0))
                .fold(0.0, f64::max))
        })
    }
}
