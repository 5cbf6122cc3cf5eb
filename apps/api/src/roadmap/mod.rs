// Roadmap Generation — prompt construction, response validation, memoization.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod cache;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validate;
