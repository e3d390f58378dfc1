// Campaign analysis pipeline: validation, prompt assembly, oracle scoring,
// local aggregation, CSV export.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod export;
pub mod handlers;
pub mod models;
pub mod oracle;
pub mod prompts;
pub mod scoring;
