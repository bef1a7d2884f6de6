//! `tokenloom industry`

use anyhow::Result;
use serde_json::json;
use tokenloom_core::knowledge::{accessibility_requirements, industry_colors, industry_context};
use tokenloom_core::detect_industry;

use crate::output;

pub fn handle(idea: &str) -> Result<()> {
    let industry = detect_industry(idea);
    let context = industry_context(industry);
    let colors = industry_colors(industry);
    let requirements = accessibility_requirements(industry);

    output::data(
        "industry",
        &json!({
            "industry": industry,
            "defaults": context,
            "colors": colors.as_ref().map(|c| json!({
                "primary": c.primary,
                "accent": c.accent,
                "neutral": c.neutral,
                "rationale": c.rationale,
            })),
            "accessibility": requirements,
        }),
    );

    output::header(&format!("Industry: {industry}"));
    output::kv("Philosophy", context.philosophy.as_str());
    output::kv("Density", context.density.as_str());
    output::kv("Warmth", &format!("{}/10", context.warmth));
    output::kv("Clarity", &format!("{}/10", context.clarity));
    output::kv("Speed", &format!("{}/10", context.speed));
    match colors {
        Some(c) => {
            output::kv(
                "Palette",
                &format!(
                    "{}{} {}{} {}{}",
                    output::swatch(c.primary),
                    c.primary,
                    output::swatch(c.accent),
                    c.accent,
                    output::swatch(c.neutral),
                    c.neutral
                ),
            );
            output::dim(&format!("  {}", c.rationale));
        }
        None => output::dim("  No industry palette; colors follow warmth"),
    }
    output::kv("Accessibility", &requirements.join(", "));
    Ok(())
}
