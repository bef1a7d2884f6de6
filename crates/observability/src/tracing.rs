//! Span macros and helpers used across tokenloom crates.

/// Span covering one design-system generation run.
///
/// ```rust
/// use tokenloom_observability::generation_span;
///
/// let span = generation_span!("Acme CRM for logistics teams");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! generation_span {
    ($product_idea:expr) => {
        tracing::info_span!(
            "generation.run",
            product_idea = $product_idea,
            industry = tracing::field::Empty,
            quality_score = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span for one agent step (strategist, visual identity, ...).
#[macro_export]
macro_rules! agent_span {
    ($agent:expr, $operation:expr) => {
        tracing::info_span!(
            "agent.operation",
            agent.name = $agent,
            operation = $operation,
            source = tracing::field::Empty,
        )
    };
}

/// Span for a model call.
#[macro_export]
macro_rules! llm_span {
    ($model:expr) => {
        tracing::debug_span!(
            "llm.request",
            llm.model = $model,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Mark the current span as failed and log the error.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record `duration` in milliseconds under `key` on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
