// Matching: narrative generation around the deterministic score, plus the HTTP surface.
// All LLM calls go through llm_client::TextGenerator.

pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod validation;
