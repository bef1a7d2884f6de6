//! Terminal output helpers: styled text for humans, one JSON object per line for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for spinners

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokenloom_core::Rgb;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn envelope(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", envelope(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if !is_json() {
        println!("{}", style(text).dim());
    }
}

/// Structured result of a command. Text mode prints nothing; callers render their own view.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if !is_json() {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Two-space block in the color itself, when the terminal takes colors.
pub fn swatch(color: Rgb) -> String {
    if console::colors_enabled() {
        let Rgb(r, g, b) = color;
        format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m")
    } else {
        String::new()
    }
}

/// Mark for a pass/fail check.
pub fn verdict(pass: bool) -> String {
    if pass {
        style("pass").green().to_string()
    } else {
        style("fail").red().to_string()
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table with a bold cyan header row.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

pub fn table_print(table: &Table) {
    if !is_json() {
        println!("{table}");
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner on stderr; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    success(message);
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    error(message);
}
