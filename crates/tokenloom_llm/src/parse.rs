//! Response parser: pull one JSON object out of model output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Parse model output as a JSON object. Tolerates markdown fences and prose around the object;
/// anything that is not an object is an error.
pub fn parse_json_object(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    let json_str = match trimmed.find('{') {
        Some(start) => {
            let end = trimmed.rfind('}').context("no closing brace")?;
            if end < start {
                bail!("no JSON object in model output");
            }
            &trimmed[start..=end]
        }
        None => trimmed,
    };
    let value: Value = serde_json::from_str(json_str).context("parse model JSON response")?;
    if !value.is_object() {
        bail!("expected a JSON object, got {}", kind(&value));
    }
    Ok(value)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
