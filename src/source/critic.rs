use std::sync::Arc;

use super::writer::request_error;
use crate::error::JokeBotError;
use crate::prompt::PromptTemplates;
use crate::providers::TextCompletion;
use crate::similarity::SimilarityScorer;
use crate::state::{Category, Language};

/// Outcome of one critique.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Too close to a joke already told; the oracle was not consulted.
    TooSimilar(f64),
    Approved,
    Rejected,
}

impl Verdict {
    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Novelty gate followed by the LLM approval oracle.
pub struct CriticReviewer {
    scorer: Box<dyn SimilarityScorer>,
    completion: TextCompletion,
    templates: Arc<PromptTemplates>,
    threshold: f64,
}

impl CriticReviewer {
    pub fn new(
        scorer: Box<dyn SimilarityScorer>,
        completion: TextCompletion,
        templates: Arc<PromptTemplates>,
        threshold: f64,
    ) -> Self {
        Self {
            scorer,
            completion,
            templates,
            threshold,
        }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub async fn review(
        &self,
        draft: &str,
        history: &[&str],
        category: Category,
        language: Language,
    ) -> Result<Verdict, JokeBotError> {
        if draft.trim().is_empty() {
            tracing::debug!("Empty draft, rejecting without review");
            return Ok(Verdict::Rejected);
        }

        let max = self
            .scorer
            .max_similarity(draft, history)
            .await
            .map_err(|e| JokeBotError::Similarity(format!("{e:#}")))?;
        tracing::debug!(similarity = max, scorer = self.scorer.name(), "Novelty check");
        if max > self.threshold {
            return Ok(Verdict::TooSimilar(max));
        }

        let prompt = self.templates.evaluate_joke(draft, category, language)?;
        let decision = self
            .completion
            .complete(&prompt)
            .await
            .map_err(|e| request_error(&self.completion, e))?;

        if is_approval(&decision) {
            Ok(Verdict::Approved)
        } else {
            tracing::debug!(decision = decision.as_str(), "Critic rejected draft");
            Ok(Verdict::Rejected)
        }
    }
}

/// Loose match: anything mentioning "approve" or "yes" counts.
pub fn is_approval(decision: &str) -> bool {
    let decision = decision.to_lowercase();
    decision.contains("approve") || decision.contains("yes")
}
