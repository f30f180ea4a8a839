use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::answer_question;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = answer_question(
        state.generator.as_ref(),
        question,
        &request.documents,
        state.config.chat_context_chars,
    )
    .await;

    Ok(Json(ChatResponse { answer }))
}
