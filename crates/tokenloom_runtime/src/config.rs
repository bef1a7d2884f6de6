//! Runtime configuration for tokenloom

use std::str::FromStr;

use tokenloom_constant::{defaults, env};
use tokenloom_llm::RequestLimits;

use crate::error::RuntimeError;

/// LLM provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    OpenAI,
    Ollama,
    /// Rules only, no model calls.
    #[default]
    None,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => "openai",
            LlmProvider::Ollama => "ollama",
            LlmProvider::None => "none",
        }
    }

    /// Model used when none is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => defaults::OLLAMA_MODEL,
            LlmProvider::OpenAI | LlmProvider::None => defaults::OPENAI_MODEL,
        }
    }
}

impl FromStr for LlmProvider {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAI),
            "ollama" => Ok(LlmProvider::Ollama),
            "none" | "rules" | "off" => Ok(LlmProvider::None),
            other => Err(RuntimeError::ProviderNotFound(other.to_string())),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub provider: LlmProvider,
    /// Model name passed to the provider
    pub model: String,
    /// Provider endpoint override
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Timeout and retry budget for every model call
    pub limits: RequestLimits,
    /// Quality score under which the refinement hook runs
    pub refine_threshold: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: defaults::OPENAI_MODEL.to_string(),
            base_url: None,
            api_key: None,
            limits: RequestLimits::new(defaults::TIMEOUT_SECS, defaults::MAX_RETRIES),
            refine_threshold: defaults::REFINE_THRESHOLD,
        }
    }

    pub fn with_provider(mut self, provider: LlmProvider) -> Self {
        // Keep the model in step with the provider unless one was chosen explicitly.
        if self.model == self.provider.default_model() {
            self.model = provider.default_model().to_string();
        }
        self.provider = provider;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_limits(mut self, limits: RequestLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_refine_threshold(mut self, threshold: f64) -> Self {
        self.refine_threshold = threshold;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    ///
    /// Unparseable values are ignored and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        config.api_key = get(env::OPENAI_API_KEY);

        let provider = match get(env::PROVIDER).map(|p| p.parse::<LlmProvider>()) {
            Some(Ok(provider)) => provider,
            Some(Err(_)) | None if config.api_key.is_some() => LlmProvider::OpenAI,
            _ => LlmProvider::None,
        };
        config = config.with_provider(provider);

        if let Some(model) = get(env::MODEL).or_else(|| get(env::MODEL_NAME)) {
            config.model = model;
        }
        config.base_url = get(env::BASE_URL);

        if let Some(secs) = get(env::TIMEOUT_SECS).and_then(|v| v.parse::<u64>().ok()) {
            config.limits.timeout_secs = secs;
        }
        if let Some(retries) = get(env::MAX_RETRIES).and_then(|v| v.parse::<u32>().ok()) {
            config.limits.max_retries = retries;
        }

        config
    }
}
