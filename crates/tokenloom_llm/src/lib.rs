//! tokenloom-llm — model interface, prompt framing, tolerant JSON parsing.

mod client;
mod ollama;
mod openai;
mod parse;
mod prompt;
mod types;

pub use client::ModelClient;
pub use ollama::OllamaClient;
pub use openai::OpenAIClient;
pub use parse::parse_json_object;
pub use prompt::{JSON_ONLY_INSTRUCTION, build_prompt, build_user_content};
pub use types::{CompletionRequest, RequestLimits};
