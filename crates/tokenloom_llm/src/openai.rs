//! OpenAI-compatible Chat Completions client.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokenloom_constant::defaults;

use crate::client::{ModelClient, complete_with_retries};
use crate::prompt::build_user_content;
use crate::types::CompletionRequest;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

pub struct OpenAIClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl OpenAIClient {
    /// `api_key` is required; `base_url` and `model` default to api.openai.com and
    /// [`defaults::OPENAI_MODEL`].
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API key required: set OPENAI_API_KEY"))?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            model: model.unwrap_or_else(|| defaults::OPENAI_MODEL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "response_format": { "type": "json_object" }
        });
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            anyhow::bail!("openai error {}: {}", status, text);
        }
        let parsed: ChatResponse = serde_json::from_str(&text)?;
        Ok(parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or("")
            .to_string())
    }
}

#[async_trait]
impl ModelClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Value> {
        let user = build_user_content(&request);
        let system = request.system_prompt.trim();
        complete_with_retries("openai", request.limits, || self.chat(system, &user)).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        assert!(OpenAIClient::new(None, None, None).is_err());
        assert!(OpenAIClient::new(Some("  ".into()), None, None).is_err());
        let client = OpenAIClient::new(Some("sk-test".into()), None, None).unwrap();
        assert_eq!(client.model(), defaults::OPENAI_MODEL);
    }
}
