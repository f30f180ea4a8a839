// Quote analysis: prompt → model → section parse → risk score.
// All model calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod record;
pub mod risk;
pub mod sections;
pub mod summary;
