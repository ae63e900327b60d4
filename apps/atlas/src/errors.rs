#![allow(dead_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Per-file variants (`Io`, `Extraction`, `Pdf`, `Docx`, `InvalidUtf8`) never escape
/// the extraction boundary; the run-level variants abort the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading {}: {message}", .path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("{kind} folder not found: {}", .path.display())]
    MissingFolder { kind: FolderKind, path: PathBuf },

    #[error("No valid job descriptions found in {}", .0.display())]
    NoJobDescriptions(PathBuf),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Report error: {0}")]
    Report(String),
}

/// Which input folder a `MissingFolder` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    JobDescriptions,
    Resumes,
}

impl std::fmt::Display for FolderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolderKind::JobDescriptions => write!(f, "Job descriptions"),
            FolderKind::Resumes => write!(f, "Resumes"),
        }
    }
}

impl AtlasError {
    /// Wraps any per-file failure with the path it happened on.
    pub fn extraction(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AtlasError::Extraction {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_folder_message_names_kind_and_path() {
        let err = AtlasError::MissingFolder {
            kind: FolderKind::Resumes,
            path: PathBuf::from("/tmp/resumes"),
        };
        assert_eq!(err.to_string(), "Resumes folder not found: /tmp/resumes");
    }

    #[test]
    fn test_extraction_error_names_file() {
        let err = AtlasError::extraction("cv.pdf", "bad xref");
        assert_eq!(err.to_string(), "Error reading cv.pdf: bad xref");
    }
}
