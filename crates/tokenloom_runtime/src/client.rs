//! Model client construction from [`RuntimeConfig`].

use std::sync::Arc;

use tokenloom_llm::{ModelClient, OllamaClient, OpenAIClient};
use tracing::debug;

use crate::config::{LlmProvider, RuntimeConfig};
use crate::error::{Result, RuntimeError};

/// `None` means rules only.
pub fn build_client(config: &RuntimeConfig) -> Result<Option<Arc<dyn ModelClient>>> {
    let client: Arc<dyn ModelClient> = match config.provider {
        LlmProvider::None => return Ok(None),
        LlmProvider::OpenAI => Arc::new(
            OpenAIClient::new(
                config.api_key.clone(),
                config.base_url.clone(),
                Some(config.model.clone()),
            )
            .map_err(|e| RuntimeError::ConfigError(format!("OpenAI client: {e}")))?,
        ),
        LlmProvider::Ollama => Arc::new(OllamaClient::new(
            config.base_url.clone(),
            Some(config.model.clone()),
        )),
    };
    debug!(provider = %config.provider, model = client.model(), "model client ready");
    Ok(Some(client))
}
