use axum::extract::Multipart;

use crate::errors::AppError;
use crate::models::document::UploadedDocument;

/// Multipart field carrying the pasted job description.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// The scan / generate form: a job description plus an optional resume file.
#[derive(Debug, Default)]
pub struct ResumeForm {
    pub job_description: String,
    pub resume: Option<UploadedDocument>,
}

impl ResumeForm {
    /// Reads the form from a multipart body. Unknown fields are ignored.
    /// A file part with no name and no bytes counts as "no file chosen".
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ResumeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            match field.name().unwrap_or("") {
                JOB_DESCRIPTION_FIELD => {
                    form.job_description = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Unreadable job description: {e}")))?;
                }
                RESUME_FIELD => {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let content = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Unreadable resume upload: {e}")))?;
                    if !(filename.is_empty() && content.is_empty()) {
                        form.resume = Some(UploadedDocument::new(filename, content));
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Returns the job description, rejecting blank input before any model call.
    pub fn require_job_description(&self) -> Result<&str, AppError> {
        if self.job_description.trim().is_empty() {
            return Err(AppError::EmptyInput(
                "job_description cannot be empty".to_string(),
            ));
        }
        Ok(&self.job_description)
    }
}
