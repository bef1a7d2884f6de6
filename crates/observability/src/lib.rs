//! tokenloom observability: structured logging and optional trace export.
//!
//! Logs go to stderr through `tracing-subscriber`, filtered by an `EnvFilter`. When an OTLP
//! endpoint is configured, spans are also exported over gRPC.
//!
//! ```no_run
//! use tokenloom_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("tokenloom-cli").with_log_level("debug");
//! init(config)?;
//! tracing::info!("ready");
//! # Ok::<(), tokenloom_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` - Service name
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint
//! - `TOKENLOOM_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, shutdown};
pub use tracing::{record_duration, record_error};
