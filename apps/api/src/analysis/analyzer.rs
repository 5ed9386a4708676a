//! Resume Analyzer: one model call producing the keyword-match report.
//!
//! Flow: extract text (blocking pool) → build analysis prompt → model → report.
//! The report is returned verbatim; no structural validation happens here.

use tracing::info;

use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::extraction::extract_text_blocking;
use crate::llm_client::TextGenerator;
use crate::models::document::UploadedDocument;

pub const MISSING_FILE_MESSAGE: &str = "Uploaded file not found.";
pub const EMPTY_TEXT_MESSAGE: &str = "No text could be extracted from the uploaded resume.";
pub const EMPTY_REPORT_MESSAGE: &str = "Failed to generate keywords.";

/// Extracts the uploaded resume and analyzes it against `job_description`.
pub async fn analyze_resume(
    model: &dyn TextGenerator,
    job_description: &str,
    document: Option<UploadedDocument>,
) -> Result<String, AppError> {
    let document = document.ok_or_else(|| AppError::EmptyInput(MISSING_FILE_MESSAGE.to_string()))?;
    let resume_text = extract_text_blocking(document).await?;
    analyze_resume_text(model, job_description, &resume_text).await
}

/// Analyzes already-extracted resume text. Makes exactly one model call,
/// or none when the text is empty.
pub async fn analyze_resume_text(
    model: &dyn TextGenerator,
    job_description: &str,
    resume_text: &str,
) -> Result<String, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput(EMPTY_TEXT_MESSAGE.to_string()));
    }

    let prompt = build_analysis_prompt(resume_text, job_description);
    let report = model
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    if report.trim().is_empty() {
        return Err(AppError::Generation(EMPTY_REPORT_MESSAGE.to_string()));
    }

    info!("Keyword report generated ({} chars)", report.len());
    Ok(report)
}
