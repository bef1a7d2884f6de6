//! Dark-mode palette: primary and neutral ramps tuned for dark surfaces, plus the semantic set.

use super::colors::semantic_colors;
use crate::color::{Hsl, base_hue};
use crate::principles::DesignPrinciples;
use crate::tokens::{ColorRole, ColorToken};

/// Dark-mode steps. Offset from the light steps except `50`; the semantic `*-500` tokens
/// also appear in both palettes.
pub const DARK_STEPS: [u16; 10] = [50, 150, 250, 350, 450, 550, 650, 750, 850, 950];

const DARK_SATURATION: f64 = 0.5;
const NEUTRAL_SATURATION: f64 = 0.05;

fn primary_lightness(step: u16) -> f64 {
    let t = f64::from(step) / 1000.0;
    if step <= 300 {
        0.7 + t * 0.2
    } else {
        0.1 + (1.0 - t) * 0.3
    }
}

/// Primary and neutral ramps for dark backgrounds plus the semantic set.
pub fn dark_colors(principles: &DesignPrinciples) -> Vec<ColorToken> {
    let hue = base_hue(principles.warmth);
    let neutral_hue = if principles.warmth.get() >= 6 { 0.08 } else { 0.58 };

    let primary = DARK_STEPS.iter().map(|&step| {
        let value = Hsl::new(hue, DARK_SATURATION, primary_lightness(step)).to_rgb();
        ColorToken::new(format!("primary-{step}"), value, ColorRole::Primary)
    });
    let neutral = DARK_STEPS.iter().map(|&step| {
        let l = (1.0 - f64::from(step) / 1000.0).clamp(0.05, 0.95);
        let value = Hsl::new(neutral_hue, NEUTRAL_SATURATION, l).to_rgb();
        ColorToken::new(format!("neutral-{step}"), value, ColorRole::Neutral)
    });

    primary.chain(neutral).chain(semantic_colors()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::luminance;
    use crate::principles::{Density, Philosophy};

    #[test]
    fn test_dark_palette_shape() {
        let p = DesignPrinciples::new(8, Density::Dense, 9, 9, Philosophy::BrandLed).unwrap();
        let colors = dark_colors(&p);
        assert_eq!(colors.len(), 24);
        assert_eq!(colors[0].name, "primary-50");
        assert_eq!(colors[9].name, "primary-950");
        assert_eq!(colors[10].name, "neutral-50");
        assert_eq!(colors[23].name, "info-500");
    }

    #[test]
    fn test_names_shared_with_light_palette() {
        let p = DesignPrinciples::new(5, Density::Balanced, 8, 7, Philosophy::ComponentFirst).unwrap();
        let light = crate::identity::VisualIdentity::new(&p, "Notes app").generate(None);
        let mut shared: Vec<String> = dark_colors(&p)
            .into_iter()
            .map(|t| t.name)
            .filter(|name| light.color(name).is_some())
            .collect();
        shared.sort();
        assert_eq!(
            shared,
            [
                "error-500",
                "info-500",
                "neutral-50",
                "primary-50",
                "success-500",
                "warning-500"
            ]
        );
    }

    #[test]
    fn test_dark_neutral_darkens_along_steps() {
        let p = DesignPrinciples::new(3, Density::Dense, 9, 9, Philosophy::UtilityFirst).unwrap();
        let colors = dark_colors(&p);
        let neutral: Vec<f64> = colors[10..20].iter().map(|t| luminance(t.value)).collect();
        assert!(neutral.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_primary_lightness_split() {
        assert!((primary_lightness(50) - 0.71).abs() < 1e-9);
        assert!((primary_lightness(250) - 0.75).abs() < 1e-9);
        assert!((primary_lightness(950) - 0.115).abs() < 1e-9);
    }
}
