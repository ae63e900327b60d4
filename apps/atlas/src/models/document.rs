#![allow(dead_code)]

use std::path::Path;

use crate::extract::read_file_or_empty;
use crate::skills::{extract_skills, SkillLexicon, SkillSet};

/// A file enumerated from an input folder, with its text extracted once for the run.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    /// Empty when extraction failed.
    pub text: String,
}

impl Document {
    pub fn load(path: &Path) -> Self {
        Self {
            name: file_name(path),
            text: read_file_or_empty(path),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A job description ready for scoring. Read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct JobDescriptionEntry {
    pub name: String,
    pub text: String,
    pub skills: SkillSet,
}

impl JobDescriptionEntry {
    pub fn new(name: impl Into<String>, text: impl Into<String>, lexicon: &SkillLexicon) -> Self {
        let text = text.into();
        let skills = extract_skills(&text, lexicon);
        Self {
            name: name.into(),
            text,
            skills,
        }
    }

    /// `None` when the document produced no text.
    pub fn from_document(doc: Document, lexicon: &SkillLexicon) -> Option<Self> {
        doc.has_text()
            .then(|| Self::new(doc.name, doc.text, lexicon))
    }
}

/// A resume ready for scoring. Its skill set is kept so the report never re-reads the file.
#[derive(Debug, Clone)]
pub struct ResumeEntry {
    pub name: String,
    pub text: String,
    pub skills: SkillSet,
}

impl ResumeEntry {
    pub fn new(name: impl Into<String>, text: impl Into<String>, lexicon: &SkillLexicon) -> Self {
        let text = text.into();
        let skills = extract_skills(&text, lexicon);
        Self {
            name: name.into(),
            text,
            skills,
        }
    }

    /// `None` when the document produced no text.
    pub fn from_document(doc: Document, lexicon: &SkillLexicon) -> Option<Self> {
        doc.has_text()
            .then(|| Self::new(doc.name, doc.text, lexicon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_names_document_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.txt");
        std::fs::write(&path, "Rust and Go").unwrap();

        let doc = Document::load(&path);
        assert_eq!(doc.name, "alice.txt");
        assert_eq!(doc.text, "Rust and Go");
        assert!(doc.has_text());
    }

    #[test]
    fn test_unreadable_document_has_no_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, [0xFF, 0xFE, 0xFD]).unwrap();

        let doc = Document::load(&path);
        assert!(!doc.has_text());
        assert!(ResumeEntry::from_document(doc, &SkillLexicon::default()).is_none());
    }

    #[test]
    fn test_entry_extracts_skills() {
        let jd = JobDescriptionEntry::new("backend.txt", "Python, Docker, AWS", &SkillLexicon::default());
        assert!(jd.skills.contains("Python"));
        assert!(jd.skills.contains("AWS"));
    }
}
