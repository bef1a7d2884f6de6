//! Ollama client (self-hosted, `/api/generate`).

use anyhow::Result;
use serde_json::Value;
use tokenloom_constant::defaults;

use crate::client::{ModelClient, complete_with_retries};
use crate::prompt::build_prompt;
use crate::types::CompletionRequest;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
            model: model.unwrap_or_else(|| defaults::OLLAMA_MODEL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "format": "json",
            "stream": false
        });

        let res = self.client.post(&url).json(&body).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            anyhow::bail!("ollama error {}: {}", status, text);
        }
        let parsed: Value = serde_json::from_str(&text)?;
        Ok(parsed
            .get("response")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string())
    }
}

#[async_trait::async_trait]
impl ModelClient for OllamaClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Value> {
        let prompt = build_prompt(&request);
        complete_with_retries("ollama", request.limits, || self.generate(&prompt)).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
