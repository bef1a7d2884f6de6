//! Contrast repair: darken a color in HSL until it reaches a minimum ratio against a background.
//!
//! Darkening only helps against lighter backgrounds. The loop never raises an error; an
//! unreachable target ends with a single best-effort fallback color, or the input itself when the
//! fallback would lower contrast.

use tracing::{debug, warn};

use super::{Hsl, Rgb, contrast_ratio};

/// Tunables for [`ensure_contrast_with`]. Defaults are the shipped values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepairParams {
    /// Lightness removed per iteration.
    pub step: f64,
    pub max_iterations: u32,
    /// Lightness never goes below this inside the loop.
    pub lightness_floor: f64,
    /// Lightness forced by the fallback.
    pub fallback_lightness: f64,
    /// Saturation multiplier applied by the fallback.
    pub fallback_saturation_mult: f64,
    pub fallback_saturation_floor: f64,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            step: 0.08,
            max_iterations: 50,
            lightness_floor: 0.15,
            fallback_lightness: 0.25,
            fallback_saturation_mult: 0.8,
            fallback_saturation_floor: 0.3,
        }
    }
}

/// [`ensure_contrast_with`] using [`RepairParams::default`].
pub fn ensure_contrast(color: Rgb, background: Rgb, min_ratio: f64) -> Rgb {
    ensure_contrast_with(color, background, min_ratio, &RepairParams::default())
}

/// Return `color` unchanged if it already meets `min_ratio` against `background`, otherwise the
/// first darkened variant that does, or the fallback color when the iteration budget runs out.
/// The result never has lower contrast than `color`.
pub fn ensure_contrast_with(
    color: Rgb,
    background: Rgb,
    min_ratio: f64,
    params: &RepairParams,
) -> Rgb {
    let mut contrast = contrast_ratio(color, background);
    if contrast >= min_ratio {
        return color;
    }

    let start = Hsl::from_rgb(color);
    let mut hsl = start;
    let mut adjusted = color;
    let mut attempts = 0;

    while contrast < min_ratio && attempts < params.max_iterations {
        hsl.l = (hsl.l - params.step).max(params.lightness_floor);
        adjusted = hsl.to_rgb();
        contrast = contrast_ratio(adjusted, background);
        attempts += 1;
    }

    if contrast < min_ratio {
        let fallback = Hsl::new(
            start.h,
            (hsl.s * params.fallback_saturation_mult).max(params.fallback_saturation_floor),
            params.fallback_lightness,
        );
        adjusted = fallback.to_rgb();
        contrast = contrast_ratio(adjusted, background);
        let original = contrast_ratio(color, background);
        if contrast < original {
            warn!(
                color = %color,
                background = %background,
                min_ratio,
                contrast = original,
                "contrast target unreachable, keeping original color"
            );
            return color;
        }
        warn!(
            color = %color,
            background = %background,
            min_ratio,
            result = %adjusted,
            contrast,
            "contrast target unreachable, using fallback color"
        );
        return adjusted;
    }

    debug!(
        color = %color,
        background = %background,
        result = %adjusted,
        contrast,
        attempts,
        "repaired color contrast"
    );
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{AA_NORMAL, WHITE};

    #[test]
    fn test_passing_color_is_untouched() {
        let navy = Rgb(0x1e, 0x3a, 0x8a);
        assert!(contrast_ratio(navy, WHITE) >= AA_NORMAL);
        assert_eq!(ensure_contrast(navy, WHITE, AA_NORMAL), navy);
    }

    #[test]
    fn test_light_color_is_darkened_to_target() {
        let sky = Rgb::from_hex("#7dd3fc").unwrap();
        let repaired = ensure_contrast(sky, WHITE, AA_NORMAL);
        assert_ne!(repaired, sky);
        assert!(contrast_ratio(repaired, WHITE) >= AA_NORMAL);
    }

    #[test]
    fn test_repair_keeps_hue() {
        let orange = Rgb::from_hex("#fb923c").unwrap();
        let before = Hsl::from_rgb(orange);
        let after = Hsl::from_rgb(ensure_contrast(orange, WHITE, AA_NORMAL));
        let d = (before.h - after.h).abs();
        assert!(d.min(1.0 - d) < 0.02, "hue drifted: {before:?} -> {after:?}");
        assert!(after.l < before.l);
    }

    #[test]
    fn test_unreachable_target_returns_fallback() {
        // 21:1 is only reachable by black, which the lightness floor excludes.
        let red = Rgb(0xef, 0x44, 0x44);
        let start = Hsl::from_rgb(red);
        let repaired = ensure_contrast(red, WHITE, 21.0);
        let expected = Hsl::new(start.h, (start.s * 0.8).max(0.3), 0.25).to_rgb();
        assert_eq!(repaired, expected);
    }

    #[test]
    fn test_dark_background_keeps_original() {
        let green = Rgb::from_hex("#1cd90b").unwrap();
        let plum = Rgb::from_hex("#892388").unwrap();
        let before = contrast_ratio(green, plum);
        assert!(before < AA_NORMAL);
        let repaired = ensure_contrast(green, plum, AA_NORMAL);
        assert_eq!(repaired, green);
    }

    #[test]
    fn test_custom_params_are_honoured() {
        let params = RepairParams {
            max_iterations: 0,
            ..RepairParams::default()
        };
        let sky = Rgb::from_hex("#7dd3fc").unwrap();
        let start = Hsl::from_rgb(sky);
        let repaired = ensure_contrast_with(sky, WHITE, AA_NORMAL, &params);
        let expected = Hsl::new(start.h, (start.s * 0.8).max(0.3), 0.25).to_rgb();
        assert_eq!(repaired, expected);
    }
}
