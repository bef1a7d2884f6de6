//! Default values shared across crates.

pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const OLLAMA_MODEL: &str = "llama3.2";

pub const TIMEOUT_SECS: u64 = 60;
pub const MAX_RETRIES: u32 = 2;

/// Mean validation score under which a run is flagged for refinement.
pub const REFINE_THRESHOLD: f64 = 0.7;
