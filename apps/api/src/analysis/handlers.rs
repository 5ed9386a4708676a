//! Axum route handlers for the Scan API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::report::{missing_keywords, parse_match_score};
use crate::errors::AppError;
use crate::routes::upload::ResumeForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    /// Raw model report, shown as-is.
    pub report: String,
    /// Parsed from the report when the model followed the layout.
    pub match_score: Option<u8>,
    pub missing_keywords: Vec<String>,
}

/// POST /api/v1/scan
///
/// Analyzes the uploaded resume against the job description and returns the report.
pub async fn handle_scan(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let job_description = form.require_job_description()?;

    let report = analyze_resume(state.model.as_ref(), job_description, form.resume.clone()).await?;

    let match_score = match parse_match_score(&report) {
        Ok(score) => Some(score),
        Err(e) => {
            tracing::debug!("Could not read match score from report: {e}");
            None
        }
    };
    let missing_keywords = missing_keywords(&report);

    Ok(Json(ScanResponse {
        report,
        match_score,
        missing_keywords,
    }))
}
