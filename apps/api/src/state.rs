use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The model client. `LlmClient` in production, a scripted fake in tests.
    pub model: Arc<dyn TextGenerator>,
    pub config: Config,
    /// Page geometry for the formatted resume PDF.
    pub page_config: PageConfig,
}
