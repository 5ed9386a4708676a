//! Axum route handlers for the Generate Resume API.

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyzer::{analyze_resume_text, MISSING_FILE_MESSAGE};
use crate::errors::AppError;
use crate::extraction::extract_text_blocking;
use crate::generation::generator::{rewrite_resume, FORMAT_FAILED_MESSAGE};
use crate::layout::render_resume_pdf_blocking;
use crate::models::resume::RewrittenResume;
use crate::routes::upload::ResumeForm;
use crate::state::AppState;

/// Filename offered for the formatted resume download.
pub const PDF_FILENAME: &str = "formatted_resume.pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub report: String,
    pub resume_text: String,
    /// False when the reformat stage failed and `resume_text` is the draft.
    pub formatted: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: Option<String>,
}

struct GeneratedResume {
    report: String,
    rewritten: RewrittenResume,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// extract → analyze → rewrite. The resume is extracted once and reused.
async fn run_generation(state: &AppState, form: ResumeForm) -> Result<GeneratedResume, AppError> {
    let job_description = form.require_job_description()?;
    let document = form
        .resume
        .clone()
        .ok_or_else(|| AppError::EmptyInput(MISSING_FILE_MESSAGE.to_string()))?;

    info!("Generating resume for upload '{}'", document.filename);
    let resume_text = extract_text_blocking(document).await?;

    let model = state.model.as_ref();
    let report = analyze_resume_text(model, job_description, &resume_text).await?;
    let rewritten = rewrite_resume(model, job_description, &resume_text, &report).await?;

    Ok(GeneratedResume { report, rewritten })
}

fn pdf_download(bytes: Vec<u8>) -> Result<Response, AppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{PDF_FILENAME}\""),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build PDF response: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Runs the full chain and returns the report plus the rewritten resume text.
pub async fn handle_generate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let generated = run_generation(&state, form).await?;

    let formatted = generated.rewritten.is_formatted();
    let warnings = if formatted {
        vec![]
    } else {
        vec![FORMAT_FAILED_MESSAGE.to_string()]
    };

    Ok(Json(GenerateResponse {
        resume_text: generated.rewritten.final_text().to_string(),
        report: generated.report,
        formatted,
        warnings,
    }))
}

/// POST /api/v1/resumes/generate/pdf
///
/// Runs the full chain and returns the rewritten resume as a PDF download.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let generated = run_generation(&state, form).await?;

    let text = generated.rewritten.final_text().to_string();
    let bytes = render_resume_pdf_blocking(text, state.page_config.clone()).await?;
    pdf_download(bytes)
}

/// POST /api/v1/render
///
/// Lays out caller-supplied resume text into a PDF without calling the model.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let text = request.text.ok_or_else(|| {
        AppError::EmptyInput("Cannot generate formatted resume. Input is empty.".to_string())
    })?;

    let bytes = render_resume_pdf_blocking(text, state.page_config.clone()).await?;
    pdf_download(bytes)
}
