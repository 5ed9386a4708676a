//! Text Extraction: turns an uploaded resume (PDF or DOCX) into plain text.
//!
//! Dispatch is strictly on the filename suffix. Parsing is CPU-bound, so async
//! callers go through `extract_text_blocking`, which runs on the blocking pool.

pub mod docx;
pub mod pdf;

use tracing::info;

use crate::errors::AppError;
use crate::models::document::{DocumentFormat, UploadedDocument};

/// Extracts the plain text of `document`.
///
/// The returned text may be empty when the document has no text layer;
/// callers treat empty text as a failure before prompting the model.
pub fn extract_text(document: &UploadedDocument) -> Result<String, AppError> {
    let format = document
        .format()
        .ok_or_else(|| AppError::UnsupportedFormat {
            filename: document.filename.clone(),
        })?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&document.content)?,
        DocumentFormat::Docx => docx::extract_docx_text(&document.content)?,
    };

    info!(
        filename = %document.filename,
        format = format.label(),
        chars = text.len(),
        "Extracted resume text"
    );

    Ok(text)
}

/// Runs `extract_text` on the blocking thread pool.
pub async fn extract_text_blocking(document: UploadedDocument) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?
}
