//! `tokenloom validate <file>`

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tokenloom_core::collaboration::TOKENS_ACCESSIBILITY;
use tokenloom_core::{
    DesignPrinciples, DesignTokens, ValidationReport, cross_check, quality_score,
    validate_color_accessibility,
};

use crate::output;

/// Tokens plus principles when the file is a saved generation output.
fn load(path: &Path) -> Result<(DesignTokens, Option<DesignPrinciples>)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let Some(tokens) = value.get_mut("tokens").map(Value::take) else {
        let tokens = serde_json::from_value(value).context("expected design tokens")?;
        return Ok((tokens, None));
    };
    let tokens = serde_json::from_value(tokens).context("invalid `tokens`")?;
    let principles = value
        .get_mut("principles")
        .map(Value::take)
        .map(serde_json::from_value)
        .transpose()
        .context("invalid `principles`")?;
    Ok((tokens, principles))
}

fn report_for(tokens: &DesignTokens, principles: Option<&DesignPrinciples>) -> ValidationReport {
    match principles {
        Some(p) => cross_check(p, tokens),
        None => ValidationReport::from([(
            TOKENS_ACCESSIBILITY.to_string(),
            validate_color_accessibility(&tokens.colors),
        )]),
    }
}

pub fn handle(file: &Path) -> Result<()> {
    let (tokens, principles) = load(file)?;
    let report = report_for(&tokens, principles.as_ref());
    let score = quality_score(&report);
    let issues: usize = report.values().map(|r| r.issues.len()).sum();

    output::data(
        "validation",
        &json!({ "file": file, "report": report, "quality_score": score }),
    );

    output::header(&format!("{} ({} colors)", file.display(), tokens.colors.len()));
    let mut table = output::table(&["Check", "Result", "Score"]);
    for (name, result) in &report {
        table.add_row(vec![
            name.clone(),
            output::verdict(result.valid),
            format!("{:.2}", result.score),
        ]);
    }
    output::table_print(&table);
    for result in report.values() {
        for issue in &result.issues {
            output::warning(issue);
        }
        for warning in &result.warnings {
            output::dim(&format!("  {warning}"));
        }
    }
    output::kv("Quality", &format!("{:.0}%", score * 100.0));

    anyhow::ensure!(issues == 0, "validation failed with {issues} issue(s)");
    output::success("All checks passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(value: Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{value}").unwrap();
        file
    }

    #[test]
    fn test_load_bare_tokens() {
        let file = write(json!({
            "colors": [{ "name": "primary-500", "value": "#1e40af", "role": "primary" }]
        }));
        let (tokens, principles) = load(file.path()).unwrap();
        assert_eq!(tokens.colors.len(), 1);
        assert!(principles.is_none());
        assert_eq!(report_for(&tokens, None).len(), 1);
    }

    #[test]
    fn test_load_rejects_bad_hex() {
        let file = write(json!({
            "colors": [{ "name": "primary-500", "value": "blue", "role": "primary" }]
        }));
        assert!(load(file.path()).is_err());
    }
}
