//! Document Text Extractor — turns a file on disk into plain text.
//!
//! Dispatch is by extension (case-insensitive). `read_file` is the fallible core;
//! `read_file_or_empty` is the batch boundary: it logs the failure and yields "".

pub mod docx;
pub mod legacy_doc;

use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::path::Path;
use std::sync::Once;

use tracing::{debug, error};

use crate::errors::AtlasError;

/// File formats the extractor recognizes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
    Doc,
    Txt,
    Other,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("docx") => DocumentFormat::Docx,
            Some("pdf") => DocumentFormat::Pdf,
            Some("doc") => DocumentFormat::Doc,
            Some("txt") => DocumentFormat::Txt,
            _ => DocumentFormat::Other,
        }
    }

    /// One of the four explicitly recognized extensions.
    pub fn is_recognized(self) -> bool {
        !matches!(self, DocumentFormat::Other)
    }
}

/// Reads and extracts a file, surfacing any failure to the caller.
pub fn read_file(path: &Path) -> Result<String, AtlasError> {
    let bytes = std::fs::read(path).map_err(|e| AtlasError::extraction(path, e))?;
    extract_text(DocumentFormat::from_path(path), &bytes)
        .map_err(|e| AtlasError::extraction(path, e))
}

/// Reads a file for the batch: failures are logged with the file name and
/// treated as "no text" so one bad file never aborts the run.
pub fn read_file_or_empty(path: &Path) -> String {
    match read_file(path) {
        Ok(text) => text,
        Err(e) => {
            error!("{e}");
            String::new()
        }
    }
}

/// Converts already-read bytes into text according to `format`.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, AtlasError> {
    match format {
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Doc => Ok(legacy_doc::read_doc(bytes)),
        DocumentFormat::Txt => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentFormat::Other => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// pdf-extract panics on some malformed streams; that must stay a per-file failure.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, AtlasError> {
    match catch_parser_panic(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(result) => result.map_err(|e| AtlasError::Pdf(e.to_string())),
        Err(_) => Err(AtlasError::Pdf("PDF parser panicked".to_string())),
    }
}

thread_local! {
    static IN_PARSER: Cell<bool> = const { Cell::new(false) };
}

static PARSER_PANIC_HOOK: Once = Once::new();

/// Runs `f`, turning a panic into `Err`. Panics raised inside `f` are logged at debug
/// instead of going through the default hook to stderr; other panics are untouched.
fn catch_parser_panic<T>(f: impl FnOnce() -> T + UnwindSafe) -> std::thread::Result<T> {
    PARSER_PANIC_HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_PARSER.with(Cell::get) {
                debug!("document parser panicked: {info}");
            } else {
                default_hook(info);
            }
        }));
    });

    IN_PARSER.with(|flag| flag.set(true));
    let result = panic::catch_unwind(f);
    IN_PARSER.with(|flag| flag.set(false));
    result
}

/// UTF-8 decode that silently drops invalid byte sequences.
pub(crate) fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_path(Path::new("cv.PDF")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.Docx")), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.doc")), DocumentFormat::Doc);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.TXT")), DocumentFormat::Txt);
        assert_eq!(DocumentFormat::from_path(Path::new("cv.md")), DocumentFormat::Other);
        assert_eq!(DocumentFormat::from_path(Path::new("README")), DocumentFormat::Other);
    }

    #[test]
    fn test_only_four_formats_are_recognized() {
        assert!(DocumentFormat::Docx.is_recognized());
        assert!(DocumentFormat::Txt.is_recognized());
        assert!(!DocumentFormat::Other.is_recognized());
    }

    #[test]
    fn test_txt_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "alice.txt", "Rust — naïve café".as_bytes());
        assert_eq!(read_file(&path).unwrap(), "Rust — naïve café");
    }

    #[test]
    fn test_txt_with_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.txt", &[b'o', b'k', 0xFF, 0xFE]);
        let err = read_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.txt"), "got: {err}");
    }

    #[test]
    fn test_bad_file_yields_empty_text_at_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.txt", &[0xC3, 0x28]);
        assert_eq!(read_file_or_empty(&path), "");
    }

    #[test]
    fn test_missing_file_yields_empty_text_at_boundary() {
        assert_eq!(read_file_or_empty(Path::new("/nonexistent/atlas/cv.txt")), "");
    }

    #[test]
    fn test_other_extension_replaces_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "notes.md", &[b'g', b'o', 0xFF]);
        assert_eq!(read_file(&path).unwrap(), "go\u{FFFD}");
    }

    #[test]
    fn test_corrupt_pdf_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "cv.pdf", b"not a pdf at all");
        assert!(read_file(&path).is_err());
        assert_eq!(read_file_or_empty(&path), "");
    }

    #[test]
    fn test_corrupt_docx_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "cv.docx", b"PK but not really a zip");
        assert!(read_file(&path).is_err());
        assert_eq!(read_file_or_empty(&path), "");
    }

    #[test]
    fn test_parser_panic_becomes_error_and_guard_resets() {
        let result = catch_parser_panic(|| -> String { panic!("malformed xref") });
        assert!(result.is_err());
        assert!(!IN_PARSER.with(Cell::get));

        assert_eq!(catch_parser_panic(|| 7).unwrap(), 7);
        assert!(!IN_PARSER.with(Cell::get));
    }

    #[test]
    fn test_decode_utf8_dropping_invalid() {
        assert_eq!(decode_utf8_dropping_invalid(&[b'a', 0xFF, b'b', 0xC3]), "ab");
    }
}
