//! Light-mode color system: palette resolution, scales, semantic set, recommendations.

use tracing::debug;

use super::ColorSeeds;
use crate::color::{
    AA_NORMAL, Hsl, Rgb, ScaleSpec, SeededVariation, WHITE, base_color, contrast_ratio,
    ensure_contrast, generate_scale,
};
use crate::knowledge::industry_colors;
use crate::principles::DesignPrinciples;
use crate::tokens::{ColorRationale, ColorRecommendation, ColorRole, ColorToken, find_color};

/// Neutral seed used when no industry palette applies.
pub const DEFAULT_NEUTRAL: Rgb = Rgb(0x64, 0x74, 0x8b);

/// Analogous neighbour, in turns.
const ANALOGOUS: f64 = 1.0 / 12.0;
const SECONDARY_SATURATION_MULT: f64 = 0.8;

/// Hand-tuned seeds that are meant to clear AA on white without repair.
const SEMANTIC_SEEDS: [(&str, Hsl); 4] = [
    ("success", Hsl::new(0.4, 0.65, 0.38)),
    ("error", Hsl::new(0.0, 0.70, 0.45)),
    ("warning", Hsl::new(0.12, 0.80, 0.40)),
    ("info", Hsl::new(0.58, 0.70, 0.45)),
];

const HARMONIES: [(&str, f64); 3] = [
    ("Analogous", -ANALOGOUS),
    ("Split-complementary", 5.0 / 12.0),
    ("Triadic", 1.0 / 3.0),
];

/// Output of [`color_system`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSystem {
    pub colors: Vec<ColorToken>,
    pub rationale: ColorRationale,
    pub recommendations: Vec<ColorRecommendation>,
}

/// `success-500`, `error-500`, `warning-500`, `info-500`, each AA on white.
pub fn semantic_colors() -> Vec<ColorToken> {
    SEMANTIC_SEEDS
        .iter()
        .map(|(name, hsl)| {
            let base = hsl.to_rgb();
            let value = ensure_contrast(base, WHITE, AA_NORMAL);
            if value != base {
                debug!(name, base = %base, repaired = %value, "semantic seed needed repair");
            }
            ColorToken::new(format!("{name}-500"), value, ColorRole::Semantic)
        })
        .collect()
}

/// Analogous secondary: hue +30°, saturation ×0.8.
pub fn derive_secondary(primary: Hsl) -> Hsl {
    primary
        .rotate(ANALOGOUS)
        .with_saturation(primary.s * SECONDARY_SATURATION_MULT)
}

/// Alternative pairings around `primary`, `variation.recommendation_count()` of them.
pub fn recommendations(primary: Hsl, variation: &SeededVariation) -> Vec<ColorRecommendation> {
    HARMONIES
        .iter()
        .take(variation.recommendation_count())
        .map(|(kind, turn)| {
            let hsl = primary.rotate(*turn);
            let candidate = ensure_contrast(hsl.to_rgb(), WHITE, AA_NORMAL);
            let secondary = derive_secondary(Hsl::from_rgb(candidate)).to_rgb();
            ColorRecommendation {
                primary: candidate,
                secondary,
                rationale: format!(
                    "{kind} alternative: {candidate} paired with {secondary}, {:.2}:1 on white.",
                    contrast_ratio(candidate, WHITE)
                ),
            }
        })
        .collect()
}

struct Palette {
    primary: Rgb,
    neutral: Rgb,
    accent: Option<Rgb>,
    secondary: Option<Rgb>,
    recommendations: Vec<ColorRecommendation>,
}

/// Rule-based palette: industry suggestion or warmth base, varied by the description seed.
fn rule_palette(principles: &DesignPrinciples, description: &str) -> (Palette, &'static str) {
    let suggestion = industry_colors(principles.industry());
    let (base, neutral, accent, reason) = match suggestion {
        Some(c) => (Hsl::from_rgb(c.primary), c.neutral, Some(c.accent), c.rationale),
        None => (
            base_color(principles.warmth),
            DEFAULT_NEUTRAL,
            None,
            "Hue chosen from the warmth principle",
        ),
    };

    let variation = SeededVariation::from_description(description);
    let varied = variation.apply(base);
    debug!(
        seed = variation.seed,
        hue_offset = variation.hue_offset,
        base = %base.to_hex(),
        varied = %varied.to_hex(),
        "applied seeded variation"
    );

    let palette = Palette {
        primary: varied.to_rgb(),
        neutral,
        accent,
        secondary: Some(derive_secondary(varied).to_rgb()),
        recommendations: recommendations(varied, &variation),
    };
    (palette, reason)
}

fn seeded_palette(seeds: &ColorSeeds) -> Palette {
    Palette {
        primary: seeds.primary,
        neutral: seeds.neutral,
        accent: seeds.accent,
        secondary: seeds.secondary,
        recommendations: seeds.recommendations.iter().take(3).cloned().collect(),
    }
}

/// Build the light color system. With `seeds` the palette is taken as given; without, it is
/// derived from rules and the description.
pub fn color_system(
    principles: &DesignPrinciples,
    description: &str,
    seeds: Option<&ColorSeeds>,
) -> ColorSystem {
    let industry = principles.industry();
    let (palette, rule_reason) = match seeds {
        Some(seeds) => (seeded_palette(seeds), None),
        None => {
            let (palette, reason) = rule_palette(principles, description);
            (palette, Some(reason))
        }
    };

    let neutral = generate_scale(palette.neutral, &ScaleSpec::neutral());
    let neutral_50 = find_color(&neutral, "neutral-50").unwrap_or(WHITE);

    // Primary buttons sit on white and on neutral-50.
    let on_white = ensure_contrast(palette.primary, WHITE, AA_NORMAL);
    let primary = ensure_contrast(on_white, neutral_50, AA_NORMAL);
    if primary != palette.primary {
        debug!(from = %palette.primary, to = %primary, "primary repaired for contrast");
    }

    let mut colors = generate_scale(primary, &ScaleSpec::primary());
    colors.extend(neutral);
    if let Some(secondary) = palette.secondary {
        colors.extend(generate_scale(secondary, &ScaleSpec::secondary()));
    }
    if let Some(accent) = palette.accent {
        colors.extend(generate_scale(accent, &ScaleSpec::accent()));
    }
    colors.extend(semantic_colors());

    let accent_text = match palette.accent {
        Some(accent) => format!("Accent color ({accent}) adds visual interest."),
        None => "No accent color specified.".to_string(),
    };
    let secondary_text = palette
        .secondary
        .map(|s| format!("Secondary color ({s}) is an analogous partner to the primary."));

    let rationale = match (seeds.and_then(|s| s.rationale.clone()), rule_reason) {
        (Some(text), _) => ColorRationale {
            primary: text.clone(),
            neutral: text.clone(),
            accent: text.clone(),
            secondary: secondary_text,
            overall: text,
        },
        (None, Some(reason)) => ColorRationale {
            primary: format!("Primary color ({primary}) based on industry standards for {industry}. {reason}."),
            neutral: format!(
                "Neutral color ({}) provides balanced base for UI elements.",
                palette.neutral
            ),
            accent: accent_text,
            secondary: secondary_text,
            overall: format!("Color system generated using industry patterns for {industry}."),
        },
        (None, None) => ColorRationale {
            primary: format!(
                "Primary color ({primary}) selected to align with {industry} industry standards and design principles."
            ),
            neutral: format!(
                "Neutral color ({}) chosen to complement primary and support {} density UI.",
                palette.neutral, principles.density
            ),
            accent: accent_text,
            secondary: secondary_text,
            overall: format!(
                "Color system designed for {industry} with {}/10 warmth and {} philosophy.",
                principles.warmth, principles.philosophy
            ),
        },
    };

    ColorSystem {
        colors,
        rationale,
        recommendations: palette.recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{Industry, industry_context};
    use crate::principles::{Density, Philosophy};

    fn principles(warmth: i64) -> DesignPrinciples {
        DesignPrinciples::new(warmth, Density::Balanced, 8, 7, Philosophy::ComponentFirst).unwrap()
    }

    #[test]
    fn test_semantic_set_is_accessible() {
        let semantic = semantic_colors();
        let names: Vec<_> = semantic.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["success-500", "error-500", "warning-500", "info-500"]);
        for token in &semantic {
            assert!(contrast_ratio(token.value, WHITE) >= AA_NORMAL, "{}", token.name);
        }
    }

    #[test]
    fn test_family_order() {
        let system = color_system(&principles(5), "Quiet garden", None);
        let families: Vec<_> = system
            .colors
            .iter()
            .map(|t| t.name.split('-').next().unwrap_or_default())
            .fold(Vec::<&str>::new(), |mut acc, f| {
                if acc.last() != Some(&f) {
                    acc.push(f);
                }
                acc
            });
        assert_eq!(
            families,
            ["primary", "neutral", "secondary", "success", "error", "warning", "info"]
        );
    }

    #[test]
    fn test_industry_palette_adds_accent() {
        let p = principles(4).with_industry_context(industry_context(Industry::Healthcare));
        let system = color_system(&p, "Patient intake", None);
        assert!(system.colors.iter().any(|t| t.name == "accent-500"));
        assert!(system.rationale.primary.contains("healthcare"));
    }

    #[test]
    fn test_recommendation_count_follows_seed() {
        let description = "Acme CRM for logistics teams";
        let variation = SeededVariation::from_description(description);
        let system = color_system(&principles(5), description, None);
        assert_eq!(system.recommendations.len(), variation.recommendation_count());
        for rec in &system.recommendations {
            assert!(contrast_ratio(rec.primary, WHITE) >= AA_NORMAL);
        }
    }

    #[test]
    fn test_seeds_are_used_without_variation() {
        let seeds = ColorSeeds::new(Rgb(0x1e, 0x40, 0xaf), Rgb(0x47, 0x55, 0x69))
            .with_rationale("Deep blue for trust");
        let a = color_system(&principles(5), "one", Some(&seeds));
        let b = color_system(&principles(5), "two", Some(&seeds));
        assert_eq!(a.colors, b.colors);
        // Already accessible, so only HSL re-quantization can move it.
        let primary = find_color(&a.colors, "primary-500").unwrap();
        for (got, want) in [(primary.0, 0x1e), (primary.1, 0x40), (primary.2, 0xaf)] {
            assert!(got.abs_diff(want) <= 1, "{primary}");
        }
        assert!(a.recommendations.is_empty());
        assert_eq!(a.rationale.overall, "Deep blue for trust");
        assert!(find_color(&a.colors, "secondary-500").is_none());
    }

    #[test]
    fn test_light_seed_primary_is_repaired() {
        let seeds = ColorSeeds::new(Rgb(0x7d, 0xd3, 0xfc), DEFAULT_NEUTRAL);
        let system = color_system(&principles(5), "", Some(&seeds));
        let primary = find_color(&system.colors, "primary-500").unwrap();
        let neutral_50 = find_color(&system.colors, "neutral-50").unwrap();
        assert!(contrast_ratio(primary, WHITE) >= AA_NORMAL);
        assert!(contrast_ratio(primary, neutral_50) >= AA_NORMAL);
    }

    #[test]
    fn test_derive_secondary() {
        let secondary = derive_secondary(Hsl::new(0.95, 0.5, 0.4));
        assert!((secondary.h - (0.95 + 1.0 / 12.0 - 1.0)).abs() < 1e-9);
        assert!((secondary.s - 0.4).abs() < 1e-9);
        assert_eq!(secondary.l, 0.4);
    }
}
