use std::collections::{BTreeMap, BTreeSet};

use super::traits::SimilarityScorer;
use super::vector::cosine_similarity;
use crate::providers::ProviderFuture;

/// Offline scorer: cosine over lowercase word counts.
///
/// Catches verbatim and near-verbatim repeats without any network call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalScorer;

fn word_counts(text: &str) -> BTreeMap<String, f32> {
    let mut counts = BTreeMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        *counts.entry(word.to_lowercase()).or_insert(0.0) += 1.0;
    }
    counts
}

fn score(a: &BTreeMap<String, f32>, b: &BTreeMap<String, f32>) -> f64 {
    let vocabulary: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    let va: Vec<f32> = vocabulary
        .iter()
        .map(|w| a.get(*w).copied().unwrap_or(0.0))
        .collect();
    let vb: Vec<f32> = vocabulary
        .iter()
        .map(|w| b.get(*w).copied().unwrap_or(0.0))
        .collect();
    cosine_similarity(&va, &vb)
}

impl LexicalScorer {
    pub fn score_all(text: &str, others: &[&str]) -> Vec<f64> {
        let base = word_counts(text);
        others
            .iter()
            .map(|other| score(&base, &word_counts(other)))
            .collect()
    }
}

impl SimilarityScorer for LexicalScorer {
    fn name(&self) -> &str {
        "lexical"
    }

    fn similarity<'a>(&'a self, text: &'a str, others: &'a [&'a str]) -> ProviderFuture<'a, Vec<f64>> {
        Box::pin(async move { Ok(Self::score_all(text, others)) })
    }
}
