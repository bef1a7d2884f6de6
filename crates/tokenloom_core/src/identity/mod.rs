//! Visual identity: assembles a full [`DesignTokens`] set from principles.
//!
//! Colors come either from caller-supplied [`ColorSeeds`] (typically a model response) or from
//! rules: the industry palette, or the warmth base color, varied by the product description.
//! In both cases the primary is repaired before it is expanded, so the result always passes
//! [`validate_color_accessibility`](crate::validation::validate_color_accessibility) whenever
//! repair succeeds.

mod colors;
mod dark;
mod layout;

pub use colors::{
    ColorSystem, DEFAULT_NEUTRAL, color_system, derive_secondary, recommendations, semantic_colors,
};
pub use dark::{DARK_STEPS, dark_colors};
pub use layout::{border_radius, shadows, spacing, spacing_unit, typography};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::Rgb;
use crate::principles::DesignPrinciples;
use crate::tokens::{ColorRecommendation, DesignTokens};

/// Palette seeds chosen outside the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSeeds {
    pub primary: Rgb,
    pub neutral: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<ColorRecommendation>,
}

impl ColorSeeds {
    pub fn new(primary: Rgb, neutral: Rgb) -> Self {
        Self {
            primary,
            neutral,
            accent: None,
            secondary: None,
            rationale: None,
            recommendations: Vec::new(),
        }
    }

    pub fn with_accent(mut self, accent: Rgb) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn with_secondary(mut self, secondary: Rgb) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Token generation for one run.
#[derive(Debug, Clone, Copy)]
pub struct VisualIdentity<'a> {
    principles: &'a DesignPrinciples,
    description: &'a str,
}

impl<'a> VisualIdentity<'a> {
    pub fn new(principles: &'a DesignPrinciples, description: &'a str) -> Self {
        Self {
            principles,
            description,
        }
    }

    pub fn generate(&self, seeds: Option<&ColorSeeds>) -> DesignTokens {
        let system = color_system(self.principles, self.description, seeds);
        let p = self.principles;

        info!(
            colors = system.colors.len(),
            recommendations = system.recommendations.len(),
            seeded = seeds.is_some(),
            "generated visual identity"
        );

        DesignTokens {
            colors: system.colors,
            dark_colors: Some(dark_colors(p)),
            typography: typography(p),
            spacing: spacing(p),
            border_radius: border_radius(p.philosophy),
            shadows: shadows(p.density),
            color_rationale: Some(system.rationale),
            recommendations: system.recommendations,
        }
    }
}
