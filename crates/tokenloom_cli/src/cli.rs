//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokenloom_core::{BrandTrait, Platform, TargetUser};

/// Accessible design tokens from a one-line product idea
#[derive(Parser)]
#[command(name = "tokenloom", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate principles, tokens and a validation report for a product idea
    Generate(GenerateArgs),
    /// Validate a tokens file (or a saved `generate` output)
    Validate {
        /// JSON file with `colors`, or a full generation output
        file: PathBuf,
    },
    /// WCAG contrast ratio between two colors
    Contrast {
        /// Foreground, #RRGGBB
        foreground: String,
        /// Background, #RRGGBB
        background: String,
    },
    /// Darken a color until it reaches a contrast ratio
    Repair {
        /// Color to repair, #RRGGBB
        color: String,
        #[arg(short, long, default_value = "#ffffff")]
        background: String,
        /// Minimum contrast ratio
        #[arg(short, long, default_value_t = 4.5)]
        min: f64,
    },
    /// Expand one seed color into a 50..900 scale
    Scale {
        /// Seed color, #RRGGBB
        hex: String,
        #[arg(short, long, default_value = "primary")]
        family: ScaleFamily,
    },
    /// Detect the industry of a product idea and show its defaults
    Industry {
        /// Product idea
        idea: String,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Product idea, e.g. "Patient intake for a rural clinic"
    pub idea: String,
    /// Target users, comma separated (B2B, B2C, enterprise, consumer)
    #[arg(long, value_delimiter = ',')]
    pub users: Vec<TargetUser>,
    /// Brand traits, comma separated
    #[arg(long, value_delimiter = ',')]
    pub traits: Vec<BrandTrait>,
    /// Platforms, comma separated (web, mobile, dashboard, marketing)
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<Platform>,
    /// Provider to use (openai, ollama, none). Uses TOKENLOOM_PROVIDER env if not set.
    #[arg(long)]
    pub provider: Option<String>,
    /// Model to use. Uses TOKENLOOM_MODEL env if not set.
    #[arg(long)]
    pub model: Option<String>,
    /// Skip the model and use rules only
    #[arg(long, conflicts_with = "provider")]
    pub rules: bool,
    /// Write the full output as JSON to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScaleFamily {
    Primary,
    Secondary,
    Accent,
    Neutral,
}
