//! Runtime error types

use thiserror::Error;

use tokenloom_core::CoreError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
