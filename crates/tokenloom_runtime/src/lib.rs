//! tokenloom-runtime: configuration, model wiring and the generation pipeline.
//!
//! Every model-backed step falls back to the deterministic rules in `tokenloom-core` when no
//! client is configured or the model answer cannot be used.

pub mod agents;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;

pub use agents::{StrategistAgent, VisualIdentityAgent};
pub use client::build_client;
pub use config::{LlmProvider, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use generator::{DesignSystemGenerator, DesignSystemOutput};
