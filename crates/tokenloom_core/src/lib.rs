//! Deterministic core of tokenloom: color math, token assembly and validation.
//!
//! Nothing in this crate performs I/O or reads the environment.

pub mod collaboration;
pub mod color;
pub mod error;
pub mod identity;
pub mod input;
pub mod knowledge;
pub mod principles;
pub mod strategist;
pub mod tokens;
pub mod validation;

pub use collaboration::{ValidationReport, cross_check, quality_score, refine_tokens, should_refine};
pub use color::{Hsl, Rgb, ScaleSpec, contrast_ratio, ensure_contrast, generate_scale};
pub use error::{CoreError, Result};
pub use identity::{ColorSeeds, VisualIdentity};
pub use input::{BrandTrait, DesignSystemInput, Platform, TargetUser};
pub use knowledge::{Industry, detect_industry};
pub use principles::{
    AgentReasoning, ConfidenceScore, Density, DesignPrinciples, IndustryContext, Level, Philosophy,
};
pub use strategist::derive_principles;
pub use tokens::{
    ColorRationale, ColorRecommendation, ColorRole, ColorToken, DesignTokens, SpacingToken,
    TypographyRole, TypographyToken,
};
pub use validation::{ValidationResult, validate_color_accessibility, validate_design_consistency};
