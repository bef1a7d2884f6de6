//! CLI entry point for tokenloom.

mod cli;
mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use tokenloom_constant::app;
use tokenloom_observability::{ObservabilityConfig, init, shutdown};

use crate::cli::Cli;

/// Nearest `relative` file walking up from the current directory.
fn find_upwards(relative: &Path) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    for _ in 0..32 {
        let candidate = dir.join(relative);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?.to_path_buf();
    }
    None
}

/// Load env files. Order: 1) ~/.tokenloom/env  2) .tokenloom/env (project)  3) .env (project)
/// Variables already set are never overwritten.
fn load_tokenloom_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(app::CONFIG_DIR).join(app::ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Some(project_env) = find_upwards(&Path::new(app::CONFIG_DIR).join(app::ENV_FILE)) {
        let _ = dotenvy::from_path(&project_env);
    }
    if let Some(env_file) = find_upwards(Path::new(".env")) {
        let _ = dotenvy::from_path(&env_file);
    }
}

#[tokio::main]
async fn main() {
    load_tokenloom_config();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut obs_config = ObservabilityConfig::from_env().with_version(app::VERSION);
    if cli.verbose && obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }

    let result = commands::handle(cli).await;
    shutdown();

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
