//! `tokenloom contrast`, `repair` and `scale`.

use anyhow::{Context, Result};
use comfy_table::Cell;
use serde_json::json;
use tokenloom_core::color::{AA_NORMAL, AAA_NORMAL};
use tokenloom_core::{Rgb, ScaleSpec, contrast_ratio, ensure_contrast, generate_scale};

use crate::cli::ScaleFamily;
use crate::output;

fn parse(hex: &str, what: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).with_context(|| format!("{what} color"))
}

pub fn contrast(foreground: &str, background: &str) -> Result<()> {
    let fg = parse(foreground, "foreground")?;
    let bg = parse(background, "background")?;
    let ratio = contrast_ratio(fg, bg);
    let aa = ratio >= AA_NORMAL;
    let aaa = ratio >= AAA_NORMAL;

    output::data(
        "contrast",
        &json!({
            "foreground": fg,
            "background": bg,
            "ratio": ratio,
            "aa": aa,
            "aaa": aaa,
        }),
    );
    output::kv(
        "Colors",
        &format!("{}{fg} on {}{bg}", output::swatch(fg), output::swatch(bg)),
    );
    output::kv("Ratio", &format!("{ratio:.2}:1"));
    output::kv("AA (4.5)", &output::verdict(aa));
    output::kv("AAA (7.0)", &output::verdict(aaa));
    Ok(())
}

pub fn repair(color: &str, background: &str, min: f64) -> Result<()> {
    anyhow::ensure!(
        min.is_finite() && (1.0..=21.0).contains(&min),
        "minimum ratio must be within 1..=21, got {min}"
    );
    let original = parse(color, "input")?;
    let bg = parse(background, "background")?;
    let repaired = ensure_contrast(original, bg, min);
    let before = contrast_ratio(original, bg);
    let after = contrast_ratio(repaired, bg);

    output::data(
        "repair",
        &json!({
            "original": original,
            "repaired": repaired,
            "background": bg,
            "before": before,
            "after": after,
            "changed": repaired != original,
            "passes": after >= min,
        }),
    );
    output::kv(
        "Original",
        &format!("{}{original}  {before:.2}:1", output::swatch(original)),
    );
    output::kv(
        "Repaired",
        &format!("{}{repaired}  {after:.2}:1", output::swatch(repaired)),
    );
    if after < min {
        output::warning(&format!("could not reach {min:.1}:1 on {bg}"));
    }
    Ok(())
}

fn scale_spec(family: ScaleFamily) -> ScaleSpec {
    match family {
        ScaleFamily::Primary => ScaleSpec::primary(),
        ScaleFamily::Secondary => ScaleSpec::secondary(),
        ScaleFamily::Accent => ScaleSpec::accent(),
        ScaleFamily::Neutral => ScaleSpec::neutral(),
    }
}

pub fn scale(hex: &str, family: ScaleFamily) -> Result<()> {
    let seed = parse(hex, "seed")?;
    let colors = generate_scale(seed, &scale_spec(family));

    output::data("scale", &json!({ "seed": seed, "colors": colors }));

    let mut table = output::table(&["Token", "Hex", "", "On white"]);
    for token in &colors {
        let ratio = contrast_ratio(token.value, tokenloom_core::color::WHITE);
        table.add_row(vec![
            Cell::new(&token.name),
            Cell::new(token.value.to_hex()),
            Cell::new(output::swatch(token.value)),
            Cell::new(format!("{ratio:.2}")),
        ]);
    }
    output::table_print(&table);
    Ok(())
}
