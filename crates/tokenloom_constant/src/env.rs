//! Environment variable names read by the runtime.

pub const PROVIDER: &str = "TOKENLOOM_PROVIDER";
pub const MODEL: &str = "TOKENLOOM_MODEL";
/// Fallback for [`MODEL`].
pub const MODEL_NAME: &str = "MODEL_NAME";
pub const BASE_URL: &str = "TOKENLOOM_BASE_URL";
pub const TIMEOUT_SECS: &str = "TOKENLOOM_TIMEOUT_SECS";
pub const MAX_RETRIES: &str = "TOKENLOOM_MAX_RETRIES";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
