//! Skill Extractor — keyword-presence matching against the skill lexicon.
//!
//! Matching is a case-insensitive raw substring test, not word-boundary based:
//! the single-letter skill "R" is found inside "required" or "Mister".

pub mod lexicon;

use std::fmt;

use serde::Serialize;

pub use lexicon::SkillLexicon;

/// Canonical skill strings found in one document, in lexicon order, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Skills present in both sets, in `self`'s order.
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            skills: self
                .skills
                .iter()
                .filter(|s| other.contains(s))
                .cloned()
                .collect(),
        }
    }

    fn insert(&mut self, skill: &str) {
        if !self.contains(skill) {
            self.skills.push(skill.to_string());
        }
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::default();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

/// Rendered as `{Python, Docker}`; the empty set is `{}`.
impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.skills.join(", "))
    }
}

/// Returns every lexicon skill whose lowercase form occurs in the lowercased text.
pub fn extract_skills(text: &str, lexicon: &SkillLexicon) -> SkillSet {
    let text_lower = text.to_lowercase();
    lexicon
        .iter_skills()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .collect()
}
