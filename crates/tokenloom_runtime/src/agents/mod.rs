//! Model-backed pipeline steps with rule-based fallback.

mod strategist;
mod visual_identity;

pub use strategist::StrategistAgent;
pub use visual_identity::VisualIdentityAgent;

use std::time::Instant;

use serde_json::Value;
use tokenloom_llm::{CompletionRequest, ModelClient};
use tokenloom_observability::{llm_span, record_duration};
use tracing::Instrument;

/// One model call inside an `llm.request` span.
pub(crate) async fn ask(client: &dyn ModelClient, request: CompletionRequest) -> anyhow::Result<Value> {
    let span = llm_span!(client.model());
    async move {
        let start = Instant::now();
        let result = client.complete(request).await;
        record_duration("duration_ms", start.elapsed());
        result
    }
    .instrument(span)
    .await
}
