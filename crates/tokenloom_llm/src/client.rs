//! Model client trait and the shared retry loop.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::parse::parse_json_object;
use crate::types::{CompletionRequest, RequestLimits};

/// A model that answers a prompt with one JSON object.
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Value>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}

/// Backoff before retry `attempt` (1-based): 1s, 2s, 4s, ... capped at 10s.
pub(crate) fn backoff(attempt: u32) -> Duration {
    let secs = 2u64.saturating_pow(attempt.saturating_sub(1)).min(10);
    Duration::from_secs(secs)
}

/// Run `send` up to `1 + max_retries` times, each under the request timeout, until its output
/// parses as a JSON object.
pub(crate) async fn complete_with_retries<F, Fut>(
    provider: &str,
    limits: RequestLimits,
    mut send: F,
) -> Result<Value>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut last_error = None;
    let per_attempt = Duration::from_secs(limits.timeout_secs);

    for attempt in 0..=limits.max_retries {
        if attempt > 0 {
            let delay = backoff(attempt);
            debug!(provider, attempt, max = limits.max_retries, ?delay, "retrying");
            tokio::time::sleep(delay).await;
        }

        let outcome = match timeout(per_attempt, send()).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!(
                "request timed out after {}s",
                limits.timeout_secs
            )),
        };

        match outcome.and_then(|raw| parse_json_object(&raw)) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(provider, attempt = attempt + 1, error = %e, "model call failed");
                last_error = Some(e.context(format!("attempt {}", attempt + 1)));
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        anyhow::anyhow!("failed after {} attempts", limits.max_retries + 1)
    }))
}
