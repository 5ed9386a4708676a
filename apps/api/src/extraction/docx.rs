use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Separator placed between consecutive paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// Extracts body paragraphs of a DOCX in stored order, one per line.
///
/// Only top-level paragraphs count; tables and text boxes are skipped.
/// Empty paragraphs are kept so blank lines survive.
pub fn extract_docx_text(data: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(data).map_err(|e| AppError::Extraction {
        format: "DOCX",
        message: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// In-memory DOCX builders shared by tests across the crate.
#[cfg(test)]
pub mod fixtures {
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }
}
