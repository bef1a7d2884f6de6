//! Subscriber initialization: stderr fmt layer plus optional OTLP span export.

use once_cell::sync::OnceCell;
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

// Kept for shutdown
static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

const FALLBACK_FILTER: &str = "warn";

fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    config
        .log_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    config.validate()?;

    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    for (key, value) in &config.resource_attributes {
        attributes.push(KeyValue::new(key.clone(), value.clone()));
    }
    let resource = Resource::builder().with_attributes(attributes).build();

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let mut otlp_failure = None;
    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            match build_otlp_tracer_provider(&config.service_name, endpoint, resource) {
                Ok((tracer, provider)) => {
                    // Global provider must be set before the layer is created.
                    global::set_tracer_provider(provider.clone());
                    let _ = TRACER_PROVIDER.set(provider);
                    Some(OpenTelemetryLayer::new(tracer))
                }
                Err(e) => {
                    otlp_failure = Some(e);
                    None
                }
            }
        }
        None => None,
    };

    Registry::default()
        .with(env_filter(&config))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    match (&config.otlp_endpoint, otlp_failure) {
        (Some(endpoint), None) => tracing::debug!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            "OTLP tracing enabled"
        ),
        (Some(endpoint), Some(e)) => tracing::warn!(
            service.name = %config.service_name,
            endpoint = %endpoint,
            error = %e,
            "Failed to initialize OTLP export, falling back to console-only tracing"
        ),
        (None, _) => tracing::debug!(
            service.name = %config.service_name,
            "Tracing initialized (console only)"
        ),
    }

    Ok(())
}

fn build_otlp_tracer_provider(
    service_name: &str,
    endpoint: &str,
    resource: Resource,
) -> Result<(opentelemetry_sdk::trace::SdkTracer, SdkTracerProvider), ObservabilityError> {
    let span_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    // Batch runtime comes from the rt-tokio feature.
    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(service_name.to_string());
    Ok((tracer, provider))
}

/// Flush and stop the exporter, if one was started.
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        let _ = provider.shutdown();
        tracing::debug!("OpenTelemetry tracer provider shut down");
    }
}

pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        let config = ObservabilityConfig::default().with_log_level("debug");
        assert_eq!(env_filter(&config).to_string(), "debug");
    }

    #[test]
    fn test_invalid_config_is_rejected_before_install() {
        let config = ObservabilityConfig::default().with_otlp_endpoint("not a url");
        assert!(matches!(init(config), Err(ObservabilityError::Config(_))));
    }
}
