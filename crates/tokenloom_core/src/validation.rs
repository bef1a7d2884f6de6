//! Independent acceptance checks over generated (or externally supplied) tokens.
//!
//! Contrast is recomputed with [`contrast_ratio`], the same function generation uses.

use serde::{Deserialize, Serialize};

use crate::color::{AA_NORMAL, AAA_NORMAL, Rgb, WHITE, contrast_ratio};
use crate::principles::{Density, DesignPrinciples};
use crate::tokens::{ColorToken, DesignTokens, TypographyRole, find_color};

const ACCESSIBILITY_ISSUE_PENALTY: f64 = 0.2;
const ACCESSIBILITY_WARNING_PENALTY: f64 = 0.05;
const CONSISTENCY_ISSUE_PENALTY: f64 = 0.3;
const CONSISTENCY_WARNING_PENALTY: f64 = 0.1;

const SEMANTIC_TOKENS: [(&str, &str); 4] = [
    ("Success", "success-500"),
    ("Error", "error-500"),
    ("Warning", "warning-500"),
    ("Info", "info-500"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// In `[0, 1]`.
    pub score: f64,
}

impl ValidationResult {
    /// Score from 1.0 less the per-finding penalties, floored at 0.
    fn scored(
        issues: Vec<String>,
        warnings: Vec<String>,
        issue_penalty: f64,
        warning_penalty: f64,
    ) -> Self {
        let penalty =
            issues.len() as f64 * issue_penalty + warnings.len() as f64 * warning_penalty;
        Self {
            valid: issues.is_empty(),
            score: (1.0 - penalty).max(0.0),
            issues,
            warnings,
        }
    }
}

/// WCAG AA checks on `primary-500`, `neutral-700`, `neutral-50` and the semantic `*-500` tokens.
/// Missing tokens are skipped, not reported.
pub fn validate_color_accessibility(colors: &[ColorToken]) -> ValidationResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    let primary = find_color(colors, "primary-500");
    let neutral_50 = find_color(colors, "neutral-50");
    let neutral_700 = find_color(colors, "neutral-700");

    if let Some(primary) = primary {
        let contrast = contrast_ratio(primary, WHITE);
        if contrast < AA_NORMAL {
            issues.push(format!(
                "Primary-500 ({primary}) on white has contrast ratio {contrast:.2}, needs >= 4.5 for WCAG AA"
            ));
        } else if contrast < AAA_NORMAL {
            warnings.push(format!(
                "Primary-500 contrast is {contrast:.2}, consider increasing to 7.0 for AAA"
            ));
        }
    }

    if let Some(neutral) = neutral_700 {
        let contrast = contrast_ratio(neutral, WHITE);
        if contrast < AA_NORMAL {
            issues.push(format!(
                "Neutral-700 ({neutral}) on white has contrast ratio {contrast:.2}, needs >= 4.5 for WCAG AA"
            ));
        }
    }

    if let (Some(primary), Some(background)) = (primary, neutral_50) {
        let contrast = contrast_ratio(primary, background);
        if contrast < AA_NORMAL {
            issues.push(format!(
                "Primary-500 on neutral-50 has contrast ratio {contrast:.2}, needs >= 4.5"
            ));
        }
    }

    for (label, name) in SEMANTIC_TOKENS {
        if let Some(color) = find_color(colors, name) {
            let contrast = contrast_ratio(color, WHITE);
            if contrast < AA_NORMAL {
                issues.push(format!(
                    "{label} color ({color}) on white has contrast ratio {contrast:.2}, needs >= 4.5"
                ));
            }
        }
    }

    ValidationResult::scored(
        issues,
        warnings,
        ACCESSIBILITY_ISSUE_PENALTY,
        ACCESSIBILITY_WARNING_PENALTY,
    )
}

/// `(r + g) / 2` in unit range; higher reads warmer.
pub fn color_warmth(color: Rgb) -> f64 {
    let (r, g, _) = color.to_unit();
    (r + g) / 2.0
}

/// Heuristic agreement between the principles and the tokens built from them.
pub fn validate_design_consistency(
    principles: &DesignPrinciples,
    tokens: &DesignTokens,
) -> ValidationResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let warmth = principles.warmth.get();

    if let Some(primary) = tokens.color("primary-500") {
        let actual = color_warmth(primary);
        let expected = f64::from(warmth) / 10.0;
        if (actual - expected).abs() > 0.3 {
            if warmth >= 7 && actual < 0.4 {
                issues.push(format!(
                    "Color system is too cool (warmth score: {actual:.2}) for principles.warmth={warmth}"
                ));
            } else if warmth <= 3 && actual > 0.6 {
                issues.push(format!(
                    "Color system is too warm (warmth score: {actual:.2}) for principles.warmth={warmth}"
                ));
            }
        }
    }

    if let Some(base) = tokens.spacing.iter().filter_map(|s| s.px()).min() {
        match principles.density {
            Density::Dense if base > 6 => warnings.push(format!(
                "Spacing base unit ({base}px) seems large for dense UI"
            )),
            Density::Spacious if base < 6 => warnings.push(format!(
                "Spacing base unit ({base}px) seems small for spacious UI"
            )),
            _ => {}
        }
    }

    let min_body = tokens
        .typography
        .iter()
        .filter(|t| t.role == TypographyRole::Body)
        .filter_map(|t| t.size_px())
        .reduce(f64::min);
    if let Some(size) = min_body {
        if principles.clarity.get() >= 9 && size < 14.0 {
            warnings.push(format!(
                "Body text size ({size}px) may be too small for high clarity requirement"
            ));
        }
    }

    ValidationResult::scored(
        issues,
        warnings,
        CONSISTENCY_ISSUE_PENALTY,
        CONSISTENCY_WARNING_PENALTY,
    )
}
