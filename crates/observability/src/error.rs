//! Error types for observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Failed to initialize the subscriber or exporter
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
