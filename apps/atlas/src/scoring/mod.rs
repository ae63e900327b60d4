// Scoring: content similarity backends (TF-IDF, fuzzy) and the weighted aggregator.

pub mod aggregate;
pub mod fuzzy;
pub mod similarity;
pub mod tfidf;
