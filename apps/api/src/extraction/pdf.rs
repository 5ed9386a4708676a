use lopdf::Document;
use tracing::warn;

use crate::errors::AppError;

/// Separator placed between the texts of consecutive pages.
pub const PAGE_SEPARATOR: &str = " ";

/// Extracts text from every page of a PDF, in page order, joined by a space.
///
/// A page whose text cannot be decoded contributes an empty string rather than
/// aborting the whole document.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let doc = Document::load_mem(data).map_err(|e| AppError::Extraction {
        format: "PDF",
        message: e.to_string(),
    })?;

    let pages = doc.get_pages();
    let mut page_texts = Vec::with_capacity(pages.len());

    // BTreeMap keys iterate in page-number order.
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => page_texts.push(text.trim_end().to_string()),
            Err(e) => {
                warn!("Failed to extract text from PDF page {page_number}: {e}");
                page_texts.push(String::new());
            }
        }
    }

    Ok(page_texts.join(PAGE_SEPARATOR))
}
