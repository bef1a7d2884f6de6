//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Generation and validation both call [`contrast_ratio`]; there is no second implementation.

use super::Rgb;

/// Minimum ratio for normal body text (AA).
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal body text (AAA).
pub const AAA_NORMAL: f64 = 7.0;

fn to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of unit sRGB channels, in `[0, 1]`.
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * to_linear(r) + 0.7152 * to_linear(g) + 0.0722 * to_linear(b)
}

pub fn luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    relative_luminance(r, g, b)
}

/// `(L_lighter + 0.05) / (L_darker + 0.05)`. Order-independent.
///
/// A darker luminance of exactly zero (pure black) yields `0.0` instead of a ratio.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    if darker == 0.0 {
        return 0.0;
    }
    (lighter + 0.05) / (darker + 0.05)
}

/// True when `ratio` passes AA for normal text.
pub fn passes_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}
