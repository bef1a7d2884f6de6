//! Application metadata constants

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-user and per-project configuration directory.
pub const CONFIG_DIR: &str = ".tokenloom";
/// Env file inside [`CONFIG_DIR`].
pub const ENV_FILE: &str = "env";
