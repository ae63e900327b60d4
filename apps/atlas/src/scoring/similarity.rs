//! Similarity Scorer — pluggable content-similarity backends.
//!
//! Every backend is called as `score(job_text, resume_text)`: the job description is
//! always the reference side (TF-IDF is fitted on it), the resume the candidate side.

use clap::ValueEnum;

use crate::scoring::fuzzy::token_set_ratio;
use crate::scoring::tfidf::{cosine_similarity, TfIdfVectorizer};
use crate::text::NormalizationPolicy;

/// Implement this to add a scoring backend without touching the aggregator.
pub trait SimilarityScorer: Send + Sync {
    /// Normalization applied to both texts before `score_normalized`.
    fn policy(&self) -> NormalizationPolicy;

    /// Score in [0, 100] for texts already passed through `policy()`.
    fn score_normalized(&self, reference: &str, candidate: &str) -> f64;

    /// "tfidf" | "fuzzy" — for logs and the JSON report.
    fn backend(&self) -> &'static str;

    fn score(&self, reference: &str, candidate: &str) -> f64 {
        let policy = self.policy();
        self.score_normalized(&policy.apply(reference), &policy.apply(candidate))
    }
}

/// Content score: TF-IDF fitted on the reference text, cosine similarity × 100.
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy::Linguistic
    }

    fn score_normalized(&self, reference: &str, candidate: &str) -> f64 {
        if reference.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        let Some(vectorizer) = TfIdfVectorizer::fit(&[reference]) else {
            return 0.0;
        };
        cosine_similarity(&vectorizer.transform(reference), &vectorizer.transform(candidate))
            * 100.0
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Lexical score: token-set fuzzy ratio, integral 0–100.
pub struct FuzzyScorer;

impl SimilarityScorer for FuzzyScorer {
    fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy::Lightweight
    }

    fn score_normalized(&self, reference: &str, candidate: &str) -> f64 {
        f64::from(token_set_ratio(reference, candidate))
    }

    fn backend(&self) -> &'static str {
        "fuzzy"
    }
}

/// Which backend a run uses. One per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScoringStrategy {
    #[default]
    Tfidf,
    Fuzzy,
}

impl ScoringStrategy {
    pub fn scorer(self) -> Box<dyn SimilarityScorer> {
        match self {
            ScoringStrategy::Tfidf => Box::new(TfIdfScorer),
            ScoringStrategy::Fuzzy => Box::new(FuzzyScorer),
        }
    }
}
