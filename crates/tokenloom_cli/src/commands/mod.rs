//! Command dispatch.

pub mod color;
pub mod generate;
pub mod industry;
pub mod validate;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate::handle(args).await,
        Command::Validate { file } => validate::handle(&file),
        Command::Contrast {
            foreground,
            background,
        } => color::contrast(&foreground, &background),
        Command::Repair {
            color,
            background,
            min,
        } => color::repair(&color, &background, min),
        Command::Scale { hex, family } => color::scale(&hex, family),
        Command::Industry { idea } => industry::handle(&idea),
    }
}
