//! Text Normalizer — reduces raw document text to a canonical comparable form.

pub mod stopwords;

use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::text::stopwords::is_stopword;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex is valid"));

/// A word run, or a single punctuation character as its own token.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("static regex is valid"));

/// How text is normalized before similarity scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizationPolicy {
    /// Lowercase and strip punctuation. Used by the fuzzy scorer.
    Lightweight,
    /// Lowercase, tokenize, drop stopwords, stem. Used by the TF-IDF scorer.
    #[default]
    Linguistic,
}

impl NormalizationPolicy {
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalizationPolicy::Lightweight => normalize_lightweight(text),
            NormalizationPolicy::Linguistic => normalize_linguistic(text),
        }
    }
}

/// Lowercases and removes every character that is not a word character or whitespace.
/// Whitespace is left as-is.
pub fn normalize_lightweight(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Lowercase → tokenize → drop English stopwords → stem → join with single spaces.
pub fn normalize_linguistic(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stemmer = Stemmer::create(Algorithm::English);

    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stopword(token))
        .map(|token| stemmer.stem(token).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightweight_strips_punctuation_and_lowercases() {
        assert_eq!(
            normalize_lightweight("Python, Docker & AWS required!"),
            "python docker  aws required"
        );
    }

    #[test]
    fn test_lightweight_keeps_underscores_and_digits() {
        assert_eq!(normalize_lightweight("snake_case C++ 5+ yrs"), "snake_case c 5 yrs");
    }

    #[test]
    fn test_lightweight_empty_input() {
        assert_eq!(normalize_lightweight(""), "");
    }

    #[test]
    fn test_linguistic_drops_stopwords_and_stems() {
        assert_eq!(
            normalize_linguistic("The engineers are running the tests"),
            "engin run test"
        );
    }

    #[test]
    fn test_linguistic_keeps_punctuation_as_tokens() {
        assert_eq!(normalize_linguistic("Python, Docker"), "python , docker");
    }

    #[test]
    fn test_linguistic_empty_and_stopword_only_input() {
        assert_eq!(normalize_linguistic(""), "");
        assert_eq!(normalize_linguistic("the and of"), "");
    }

    #[test]
    fn test_linguistic_is_deterministic() {
        let text = "Experienced Python and Docker engineer";
        assert_eq!(normalize_linguistic(text), normalize_linguistic(text));
    }

    #[test]
    fn test_policy_dispatch() {
        assert_eq!(NormalizationPolicy::Lightweight.apply("Hi!"), "hi");
        assert_eq!(NormalizationPolicy::Linguistic.apply("Hi!"), "hi !");
        assert_eq!(NormalizationPolicy::default(), NormalizationPolicy::Linguistic);
    }
}
