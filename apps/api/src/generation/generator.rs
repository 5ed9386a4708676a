//! Resume Rewriter: two sequential model calls turning the original resume and
//! keyword report into a rewritten resume.
//!
//! Flow: strip markup → draft prompt → model → (gate) → format prompt → model.
//!
//! An empty draft stops the chain before the second call. An empty formatted
//! result keeps the draft so the user still gets a rewrite.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::markup::strip_markup;
use crate::generation::prompts::{build_draft_prompt, build_format_prompt};
use crate::llm_client::TextGenerator;
use crate::models::resume::RewrittenResume;

pub const DRAFT_FAILED_MESSAGE: &str = "Failed to generate a new resume based on provided input.";
pub const FORMAT_FAILED_MESSAGE: &str = "Failed to generate a formatted resume.";

/// Rewrites `resume_text` to better match `job_description` using `keyword_report`.
pub async fn rewrite_resume(
    model: &dyn TextGenerator,
    job_description: &str,
    resume_text: &str,
    keyword_report: &str,
) -> Result<RewrittenResume, AppError> {
    let cleaned_resume = strip_markup(resume_text);

    // Stage 1: draft
    let draft_prompt = build_draft_prompt(job_description, keyword_report, &cleaned_resume);
    let draft = model
        .generate(&draft_prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

    if draft.trim().is_empty() {
        return Err(AppError::Generation(DRAFT_FAILED_MESSAGE.to_string()));
    }
    info!("Rewrite draft generated ({} chars)", draft.len());

    // Stage 2: reformat
    let format_prompt = build_format_prompt(&draft, &cleaned_resume);
    let formatted = model
        .generate(&format_prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume formatting failed: {e}")))?;

    if formatted.trim().is_empty() {
        warn!("Formatting stage returned empty text; falling back to the draft");
        return Ok(RewrittenResume {
            draft,
            formatted: None,
        });
    }

    info!("Formatted resume generated ({} chars)", formatted.len());
    Ok(RewrittenResume {
        draft,
        formatted: Some(formatted),
    })
}
