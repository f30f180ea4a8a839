// Document chat: answers a question using supplied document text as context.
// No retrieval index; the context is the documents themselves, capped in size.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::chat::prompts::build_chat_prompt;
use crate::llm_client::{LlmError, TextGenerator};

pub const NO_RESPONSE_ANSWER: &str = "Sorry, I couldn't generate a response.";
pub const NO_DOCUMENTS_ANSWER: &str = "No document text available. Please upload documents first.";

/// Joins the documents with newlines and caps the result at `max_chars` characters.
pub fn build_context(documents: &[String], max_chars: usize) -> String {
    let joined = documents.join("\n");
    match joined.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => joined[..byte_idx].to_string(),
        None => joined,
    }
}

/// Answers `question` against `documents`. Model failures become the answer text.
pub async fn answer_question(
    generator: &dyn TextGenerator,
    question: &str,
    documents: &[String],
    max_context_chars: usize,
) -> String {
    if documents.iter().all(|d| d.trim().is_empty()) {
        return NO_DOCUMENTS_ANSWER.to_string();
    }

    let context = build_context(documents, max_context_chars);
    let prompt = build_chat_prompt(&context, question);

    match generator.generate(&prompt).await {
        Ok(answer) if !answer.trim().is_empty() => answer,
        Ok(_) => NO_RESPONSE_ANSWER.to_string(),
        Err(LlmError::EmptyResponse) => NO_RESPONSE_ANSWER.to_string(),
        Err(e) => {
            warn!("Chat generation failed: {e}");
            format!("Error processing question: {e}")
        }
    }
}
