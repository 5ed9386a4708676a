/// Output of the two-stage rewrite chain.
///
/// `formatted` is `None` when the reformat stage came back empty; the draft is
/// then the best text available and the caller must surface a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenResume {
    pub draft: String,
    pub formatted: Option<String>,
}

impl RewrittenResume {
    /// The text shown to the user and laid out into the PDF.
    pub fn final_text(&self) -> &str {
        self.formatted.as_deref().unwrap_or(&self.draft)
    }

    pub fn is_formatted(&self) -> bool {
        self.formatted.is_some()
    }
}
