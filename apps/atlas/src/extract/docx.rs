//! `.docx` paragraph extraction via docx-rs.
//!
//! Document → Paragraph → Run → Text. Table cells are walked too so skills listed
//! in tabular resumes are not lost.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use crate::errors::AtlasError;

/// Extracts visible text, one line per non-empty paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, AtlasError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| AtlasError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => push_paragraph(&mut paragraphs, para),
            DocumentChild::Table(table) => collect_table(&mut paragraphs, table),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn push_paragraph(out: &mut Vec<String>, para: &Paragraph) {
    let text = paragraph_text(para);
    if !text.trim().is_empty() {
        out.push(text);
    }
}

#[allow(irrefutable_let_patterns)]
fn collect_table(out: &mut Vec<String>, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                if let TableCellContent::Paragraph(para) = content {
                    push_paragraph(out, para);
                }
            }
        }
    }
}

/// Runs in a paragraph are parts of the same sentence: concatenated, no separator.
fn paragraph_text(para: &Paragraph) -> String {
    let mut parts = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => parts.push_str(&t.text),
                    RunChild::Tab(_) => parts.push('\t'),
                    _ => {}
                }
            }
        }
    }
    parts
}
