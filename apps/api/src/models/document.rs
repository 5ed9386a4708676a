use bytes::Bytes;

/// File extensions accepted for resume uploads, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the filename suffix alone; content is never sniffed.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }
}

/// A resume file as uploaded by the user. Consumed once per extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_filename(&self.filename)
    }
}
