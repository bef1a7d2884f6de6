//! Product-specific, reproducible color variation.
//!
//! A product description is hashed (FNV-1a, 32-bit) into a seed; disjoint bit ranges of the seed
//! become small hue/saturation/lightness offsets applied to a warmth-derived base color. Equal
//! descriptions always produce equal offsets. Different descriptions usually diverge, but
//! collisions are possible and acceptable.

use serde::{Deserialize, Serialize};

use super::Hsl;
use crate::principles::Level;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Total width of the hue window, in turns (±0.08 ≈ ±29°).
pub const HUE_SPREAD: f64 = 0.16;
pub const SATURATION_SPREAD: f64 = 0.2;
pub const LIGHTNESS_SPREAD: f64 = 0.1;

/// Lightness band the varied color is clamped into.
pub const LIGHTNESS_BAND: (f64, f64) = (0.35, 0.55);
pub const SATURATION_BAND: (f64, f64) = (0.35, 0.95);

pub const BASE_SATURATION: f64 = 0.7;
pub const BASE_LIGHTNESS: f64 = 0.5;

/// FNV-1a over the UTF-8 bytes of `text`.
pub fn description_seed(text: &str) -> u32 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Base hue for a warmth level: cool blue (≤3), warm orange (≥7), otherwise teal.
pub fn base_hue(warmth: Level) -> f64 {
    match warmth.get() {
        0..=3 => 0.6,
        7.. => 0.1,
        _ => 0.5,
    }
}

pub fn base_color(warmth: Level) -> Hsl {
    Hsl::new(base_hue(warmth), BASE_SATURATION, BASE_LIGHTNESS)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeededVariation {
    pub seed: u32,
    pub hue_offset: f64,
    pub saturation_offset: f64,
    pub lightness_offset: f64,
}

impl SeededVariation {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed,
            hue_offset: centered(seed, 0) * HUE_SPREAD,
            saturation_offset: centered(seed, 10) * SATURATION_SPREAD,
            lightness_offset: centered(seed, 20) * LIGHTNESS_SPREAD,
        }
    }

    pub fn from_description(description: &str) -> Self {
        Self::from_seed(description_seed(description))
    }

    pub fn apply(&self, base: Hsl) -> Hsl {
        Hsl::new(
            (base.h + self.hue_offset).rem_euclid(1.0),
            (base.s + self.saturation_offset).clamp(SATURATION_BAND.0, SATURATION_BAND.1),
            (base.l + self.lightness_offset).clamp(LIGHTNESS_BAND.0, LIGHTNESS_BAND.1),
        )
    }

    /// How many alternative palettes to recommend (1..=3).
    pub fn recommendation_count(&self) -> usize {
        1 + ((self.seed >> 24) % 3) as usize
    }
}

/// Ten bits of `seed` starting at `shift`, mapped to `[-0.5, 0.5)`.
fn centered(seed: u32, shift: u32) -> f64 {
    f64::from((seed >> shift) & 0x3ff) / 1024.0 - 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(v: u8) -> Level {
        Level::new(v).unwrap()
    }

    #[test]
    fn test_fnv_reference_values() {
        assert_eq!(description_seed(""), 0x811c_9dc5);
        assert_eq!(description_seed("a"), 0xe40c_292c);
        assert_eq!(description_seed("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_same_description_is_bit_identical() {
        let a = SeededVariation::from_description("Acme CRM for logistics teams");
        let b = SeededVariation::from_description("Acme CRM for logistics teams");
        assert_eq!(a, b);
        assert_eq!(a.hue_offset.to_bits(), b.hue_offset.to_bits());
        assert_eq!(a.saturation_offset.to_bits(), b.saturation_offset.to_bits());
        assert_eq!(a.lightness_offset.to_bits(), b.lightness_offset.to_bits());
    }

    #[test]
    fn test_offsets_stay_in_window() {
        for text in ["", "a", "Acme CRM", "Pet grooming marketplace", "Hospital triage"] {
            let v = SeededVariation::from_description(text);
            assert!(v.hue_offset >= -HUE_SPREAD / 2.0 && v.hue_offset < HUE_SPREAD / 2.0);
            assert!(v.saturation_offset.abs() <= SATURATION_SPREAD / 2.0);
            assert!(v.lightness_offset.abs() <= LIGHTNESS_SPREAD / 2.0);
            assert!((1..=3).contains(&v.recommendation_count()));
        }
    }

    #[test]
    fn test_different_descriptions_usually_diverge() {
        let a = SeededVariation::from_description("Acme CRM for logistics teams");
        let b = SeededVariation::from_description("Meditation app for night-shift nurses");
        assert_ne!(a.seed, b.seed);
        assert_ne!(a.apply(base_color(level(5))), b.apply(base_color(level(5))));
    }

    #[test]
    fn test_base_hue_selection() {
        assert_eq!(base_hue(level(1)), 0.6);
        assert_eq!(base_hue(level(2)), 0.6);
        assert_eq!(base_hue(level(3)), 0.6);
        assert_eq!(base_hue(level(4)), 0.5);
        assert_eq!(base_hue(level(6)), 0.5);
        assert_eq!(base_hue(level(7)), 0.1);
        assert_eq!(base_hue(level(10)), 0.1);
    }

    #[test]
    fn test_apply_clamps_into_bands() {
        let v = SeededVariation {
            seed: 0,
            hue_offset: 0.05,
            saturation_offset: 0.5,
            lightness_offset: -0.5,
        };
        let out = v.apply(Hsl::new(0.98, 0.7, 0.5));
        assert!((out.h - 0.03).abs() < 1e-12);
        assert_eq!(out.s, SATURATION_BAND.1);
        assert_eq!(out.l, LIGHTNESS_BAND.0);
    }
}
