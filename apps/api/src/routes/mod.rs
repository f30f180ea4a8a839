pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::chat::handlers as chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyses", post(analysis::handle_analyze))
        .route("/api/v1/extractions", post(analysis::handle_extract))
        .route("/api/v1/chat", post(chat::handle_chat))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
