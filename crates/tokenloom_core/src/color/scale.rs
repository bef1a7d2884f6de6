//! Tonal scale synthesis: one seed color becomes a 50..900 monochromatic ramp.
//!
//! Every step has a fixed target lightness except 500, which keeps the seed's own lightness.
//! A family may name a text step that is additionally repaired against white.

use super::{AA_NORMAL, Hsl, Rgb, WHITE, ensure_contrast};
use crate::tokens::{ColorRole, ColorToken};

/// Ordinal steps of a light-mode scale.
pub const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Step whose lightness is pinned to the seed.
pub const ANCHOR_STEP: u16 = 500;

/// Target lightness for a non-anchor step.
pub fn step_lightness(step: u16) -> Option<f64> {
    let l = match step {
        50 => 0.97,
        100 => 0.9,
        200 => 0.8,
        300 => 0.7,
        400 => 0.6,
        600 => 0.4,
        700 => 0.3,
        800 => 0.2,
        900 => 0.1,
        _ => return None,
    };
    Some(l)
}

/// How one color family is expanded into a scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    pub family: String,
    pub role: ColorRole,
    /// Multiplies the seed saturation at every step.
    pub saturation_mult: f64,
    /// Step repaired to AA against white, if any.
    pub text_step: Option<u16>,
}

impl ScaleSpec {
    pub fn new(family: impl Into<String>, role: ColorRole) -> Self {
        Self {
            family: family.into(),
            role,
            saturation_mult: 1.0,
            text_step: None,
        }
    }

    pub fn with_saturation_mult(mut self, mult: f64) -> Self {
        self.saturation_mult = mult;
        self
    }

    pub fn with_text_step(mut self, step: u16) -> Self {
        self.text_step = Some(step);
        self
    }

    pub fn primary() -> Self {
        Self::new("primary", ColorRole::Primary)
    }

    pub fn secondary() -> Self {
        Self::new("secondary", ColorRole::Secondary)
    }

    pub fn accent() -> Self {
        Self::new("accent", ColorRole::Accent)
    }

    /// Near-gray regardless of seed hue; step 700 is the default body-text color.
    pub fn neutral() -> Self {
        Self::new("neutral", ColorRole::Neutral)
            .with_saturation_mult(0.05)
            .with_text_step(700)
    }
}

/// Expand `seed` into tokens named `{family}-{step}`, in step order.
pub fn generate_scale(seed: Rgb, spec: &ScaleSpec) -> Vec<ColorToken> {
    let hsl = Hsl::from_rgb(seed);
    let saturation = hsl.s * spec.saturation_mult;

    SCALE_STEPS
        .iter()
        .map(|&step| {
            let lightness = step_lightness(step).unwrap_or(hsl.l);
            let mut value = Hsl::new(hsl.h, saturation, lightness).to_rgb();
            if spec.text_step == Some(step) {
                value = ensure_contrast(value, WHITE, AA_NORMAL);
            }
            ColorToken::new(format!("{}-{}", spec.family, step), value, spec.role)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::contrast_ratio;

    #[test]
    fn test_scale_has_ten_ordered_steps() {
        let tokens = generate_scale(Rgb::from_hex("#2563eb").unwrap(), &ScaleSpec::primary());
        let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "primary-50", "primary-100", "primary-200", "primary-300", "primary-400",
                "primary-500", "primary-600", "primary-700", "primary-800", "primary-900"
            ]
        );
        assert!(tokens.iter().all(|t| t.role == ColorRole::Primary));
    }

    #[test]
    fn test_anchor_keeps_seed_lightness() {
        let seed = Rgb::from_hex("#2563eb").unwrap();
        let tokens = generate_scale(seed, &ScaleSpec::primary());
        let anchor = Hsl::from_rgb(tokens[5].value);
        assert!((anchor.l - Hsl::from_rgb(seed).l).abs() <= 1.0 / 255.0);
    }

    #[test]
    fn test_lightness_decreases_along_scale() {
        // Seed lightness sits between the 400 and 600 targets.
        let tokens = generate_scale(Rgb::from_hex("#2563eb").unwrap(), &ScaleSpec::primary());
        let lum: Vec<f64> = tokens.iter().map(|t| crate::color::luminance(t.value)).collect();
        assert!(lum.windows(2).all(|w| w[0] >= w[1]), "{lum:?}");
    }

    #[test]
    fn test_neutral_reads_as_gray() {
        let tokens = generate_scale(Rgb::from_hex("#dc2626").unwrap(), &ScaleSpec::neutral());
        for token in &tokens {
            let hsl = Hsl::from_rgb(token.value);
            assert!(hsl.s < 0.1, "{} too saturated: {:?}", token.name, hsl);
        }
    }

    #[test]
    fn test_neutral_text_step_is_accessible() {
        let tokens = generate_scale(Rgb::from_hex("#fde047").unwrap(), &ScaleSpec::neutral());
        let text = tokens.iter().find(|t| t.name == "neutral-700").unwrap();
        assert!(contrast_ratio(text.value, WHITE) >= AA_NORMAL);
    }

    #[test]
    fn test_text_step_repair_applies_to_named_step_only() {
        // Lightness 0.6 at step 400 fails AA for this hue; without a text step it stays as-is.
        let seed = Rgb::from_hex("#22c55e").unwrap();
        let plain = generate_scale(seed, &ScaleSpec::secondary());
        let repaired = generate_scale(seed, &ScaleSpec::secondary().with_text_step(400));
        assert!(contrast_ratio(plain[4].value, WHITE) < AA_NORMAL);
        assert!(contrast_ratio(repaired[4].value, WHITE) >= AA_NORMAL);
        assert_eq!(plain[5], repaired[5]);
    }
}
