//! Color engine: conversions, WCAG contrast, contrast repair, seeded variation, scale synthesis.
//!
//! Everything here is a pure function over value types. Hex strings are parsed once into
//! [`Rgb`]; past that point malformed input cannot occur.
//!
//! # Example
//!
//! ```
//! use tokenloom_core::color::{AA_NORMAL, Rgb, WHITE, contrast_ratio, ensure_contrast};
//!
//! let sky = Rgb::from_hex("#7dd3fc").unwrap();
//! let text = ensure_contrast(sky, WHITE, AA_NORMAL);
//! assert!(contrast_ratio(text, WHITE) >= AA_NORMAL);
//! ```

mod contrast;
mod hsl;
mod repair;
mod rgb;
mod scale;
mod variation;

pub use contrast::{AA_NORMAL, AAA_NORMAL, contrast_ratio, luminance, passes_aa, relative_luminance};
pub use hsl::Hsl;
pub use repair::{RepairParams, ensure_contrast, ensure_contrast_with};
pub use rgb::Rgb;
pub use scale::{ANCHOR_STEP, SCALE_STEPS, ScaleSpec, generate_scale, step_lightness};
pub use variation::{SeededVariation, base_color, base_hue, description_seed};

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);
