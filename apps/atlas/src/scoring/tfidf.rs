#![allow(dead_code)]

//! TF-IDF vectorizer and cosine similarity.
//!
//! Tokens are runs of two or more word characters. idf is smoothed,
//! `ln((1 + n) / (1 + df)) + 1`, and every vector is L2-normalized.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("static regex is valid"));

fn terms(document: &str) -> impl Iterator<Item = &str> {
    TERM.find_iter(document).map(|m| m.as_str())
}

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term → column index, columns in sorted term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Learns vocabulary and idf weights. `None` when no document yields a term.
    pub fn fit(documents: &[&str]) -> Option<Self> {
        let mut df: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<&str> = terms(doc).collect();
            for term in unique {
                *df.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        if df.is_empty() {
            return None;
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(df.len());
        for (index, (term, freq)) in df.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + freq as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Some(Self { vocabulary, idf })
    }

    /// Projects a document onto the fitted vocabulary. Unknown terms are ignored;
    /// a document with no known term maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in terms(document) {
            if let Some(&index) = self.vocabulary.get(term) {
                vector[index] += 1.0;
            }
        }
        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        l2_normalize(&mut vector);
        vector
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine similarity in [0, 1] for non-negative vectors; 0 if either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_and_punctuation_are_not_terms() {
        let v = TfIdfVectorizer::fit(&["a , go r python"]).unwrap();
        assert_eq!(v.transform("").len(), 2); // "go", "python"
    }

    #[test]
    fn test_empty_vocabulary_is_none() {
        assert!(TfIdfVectorizer::fit(&[""]).is_none());
        assert!(TfIdfVectorizer::fit(&["a , !"]).is_none());
        assert!(TfIdfVectorizer::fit(&[]).is_none());
    }

    #[test]
    fn test_transform_is_unit_length() {
        let v = TfIdfVectorizer::fit(&["python docker aws"]).unwrap();
        let vec = v.transform("python python docker");
        let norm: f64 = vec.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let v = TfIdfVectorizer::fit(&["python docker"]).unwrap();
        assert!(v.transform("java kotlin").iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let doc = "python docker aws requir";
        let v = TfIdfVectorizer::fit(&[doc]).unwrap();
        let sim = cosine_similarity(&v.transform(doc), &v.transform(doc));
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_overlap_single_document_fit() {
        // Fit on 4 terms, candidate hits 2 of them once each: 2 * (0.5 * 1/√2) = 1/√2.
        let v = TfIdfVectorizer::fit(&["python docker aw requir"]).unwrap();
        let sim = cosine_similarity(
            &v.transform("python docker aw requir"),
            &v.transform("experienc python docker engin"),
        );
        assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9, "sim = {sim}");
    }

    #[test]
    fn test_idf_downweights_common_terms() {
        let v = TfIdfVectorizer::fit(&["rust python", "rust java"]).unwrap();
        let vec = v.transform("rust python");
        // columns sorted: java, python, rust
        assert!(vec[1] > vec[2], "{vec:?}");
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
