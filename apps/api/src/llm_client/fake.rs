use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Scripted stand-in for the hosted model. Replies are consumed in call order;
/// once they run out every call returns `EmptyResponse`.
pub struct FakeGenerator {
    replies: Mutex<Vec<Result<String, LlmError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(mut replies: Vec<Result<String, LlmError>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}
