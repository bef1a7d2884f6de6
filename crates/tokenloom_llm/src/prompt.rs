//! Prompt framing. Content of the prompts lives with the callers.

use crate::types::CompletionRequest;

pub const JSON_ONLY_INSTRUCTION: &str =
    "Respond with a single JSON object only, no markdown or explanation outside JSON.";

/// Single-string prompt for completion-style endpoints: system, then user content.
pub fn build_prompt(req: &CompletionRequest) -> String {
    format!(
        "{}\n\n{}",
        req.system_prompt.trim(),
        build_user_content(req)
    )
}

/// User message for chat endpoints.
pub fn build_user_content(req: &CompletionRequest) -> String {
    format!("## Task\n\n{}\n\n{}", req.user_prompt.trim(), JSON_ONLY_INSTRUCTION)
}
