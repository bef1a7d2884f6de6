//! Request types shared by every client.

/// Per-request time and retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    /// Per-attempt timeout.
    pub timeout_secs: u64,
    /// Extra attempts after the first.
    pub max_retries: u32,
}

impl RequestLimits {
    pub fn new(timeout_secs: u64, max_retries: u32) -> Self {
        Self {
            timeout_secs,
            max_retries,
        }
    }
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            max_retries: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub limits: RequestLimits,
}

impl CompletionRequest {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            limits: RequestLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: RequestLimits) -> Self {
        self.limits = limits;
        self
    }
}
