// Document chat prompt template.

/// Chat prompt template. Replace `{context}` and `{question}` before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = "
Based on the following context from uploaded manufacturing documents, answer the question.

Context:
{context}

Question: {question}

Answer:
";

pub fn build_chat_prompt(context: &str, question: &str) -> String {
    // Question first: a document containing "{question}" must not be substituted into.
    CHAT_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replacen("{context}", context, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_places_context_before_question() {
        let prompt = build_chat_prompt("Qty 500", "How many?");
        let context_at = prompt.find("Qty 500").unwrap();
        let question_at = prompt.find("Question: How many?").unwrap();
        assert!(context_at < question_at);
        assert!(prompt.trim_end().ends_with("Answer:"));
    }
}
