//! Configuration for observability/telemetry

use serde::{Deserialize, Serialize};

use crate::error::ObservabilityError;

const DEFAULT_SERVICE_NAME: &str = "tokenloom";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default)]
    pub service_version: Option<String>,

    /// OTLP endpoint for trace export (e.g., "http://localhost:4317")
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Write formatted logs to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// `EnvFilter` directive, e.g. "info" or "tokenloom_core=debug".
    /// Falls back to `RUST_LOG`, then "warn".
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub resource_attributes: Vec<(String, String)>,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            resource_attributes: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_resource_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.resource_attributes.push((key.into(), value.into()));
        self
    }

    /// Reject configurations that would fail later inside the exporter.
    pub fn validate(&self) -> Result<(), ObservabilityError> {
        if self.service_name.trim().is_empty() {
            return Err(ObservabilityError::Config("service name is empty".into()));
        }
        if let Some(endpoint) = &self.otlp_endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ObservabilityError::Config(format!(
                    "OTLP endpoint must be an http(s) URL, got {endpoint}"
                )));
            }
        }
        Ok(())
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name
    /// - `OTEL_SERVICE_VERSION` → service_version
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint
    /// - `TOKENLOOM_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            service_name: non_empty("OTEL_SERVICE_NAME").unwrap_or_else(default_service_name),
            service_version: non_empty("OTEL_SERVICE_VERSION"),
            // OTLP only when explicitly set; otherwise console-only.
            otlp_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT"),
            enable_console: true,
            log_level: non_empty("TOKENLOOM_LOG").or_else(|| non_empty("RUST_LOG")),
            resource_attributes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("tokenloom-cli")
            .with_version("0.1.0")
            .with_log_level("debug")
            .with_console(false)
            .with_resource_attribute("deployment", "local");
        assert_eq!(config.service_name, "tokenloom-cli");
        assert_eq!(config.service_version.as_deref(), Some("0.1.0"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(!config.enable_console);
        assert_eq!(config.resource_attributes.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = ObservabilityConfig::default().with_otlp_endpoint("localhost:4317");
        assert!(config.validate().is_err());
        let config = ObservabilityConfig::new(" ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert!(config.enable_console);
    }
}
