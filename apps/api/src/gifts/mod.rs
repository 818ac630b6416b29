// Gift generation: prompt building, the LLM gateway call, reply parsing,
// and the static mock catalog used as a fallback.
// All LLM calls go through llm_client.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompt_builder;
pub mod prompts;
