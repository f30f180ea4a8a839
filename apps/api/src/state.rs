use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once in `main` and passed down; nothing in the service lives in a global.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: `GeminiClient`; tests swap in a scripted fake.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
