//! Design principles: the brief the color engine is parameterized by.
//!
//! Ranges are enforced when a value is built or deserialized; the engine never re-checks them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::knowledge::Industry;

/// Integer score within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self> {
        Self::for_field("level", i64::from(value))
    }

    /// Validate `value`, naming `field` in the error.
    pub fn for_field(field: &'static str, value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::OutOfRange { field, value })
        }
    }

    /// Clamp any integer into range.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Add `delta`, capped at `cap` (and at the valid range).
    pub fn raised(self, delta: u8, cap: u8) -> Self {
        Self::saturating(i64::from(self.0.saturating_add(delta).min(cap)))
    }
}

impl TryFrom<i64> for Level {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self> {
        Self::for_field("level", value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Dense,
    #[default]
    Balanced,
    Spacious,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Dense => "dense",
            Density::Balanced => "balanced",
            Density::Spacious => "spacious",
        }
    }
}

impl FromStr for Density {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dense" => Ok(Density::Dense),
            "balanced" => Ok(Density::Balanced),
            "spacious" => Ok(Density::Spacious),
            _ => Err(CoreError::UnknownVariant {
                kind: "density",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Philosophy {
    UtilityFirst,
    #[default]
    ComponentFirst,
    BrandLed,
}

impl Philosophy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Philosophy::UtilityFirst => "utility-first",
            Philosophy::ComponentFirst => "component-first",
            Philosophy::BrandLed => "brand-led",
        }
    }
}

impl FromStr for Philosophy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utility-first" => Ok(Philosophy::UtilityFirst),
            "component-first" => Ok(Philosophy::ComponentFirst),
            "brand-led" => Ok(Philosophy::BrandLed),
            _ => Err(CoreError::UnknownVariant {
                kind: "philosophy",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Philosophy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typical principles for a detected industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContext {
    pub industry: Industry,
    pub philosophy: Philosophy,
    pub density: Density,
    pub warmth: Level,
    pub clarity: Level,
    pub speed: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub users: f64,
    pub traits: f64,
    pub platforms: f64,
}

impl ConfidenceScore {
    /// Every component clamped into `[0, 1]`.
    pub fn new(users: f64, traits: f64, platforms: f64) -> Self {
        Self {
            users: users.clamp(0.0, 1.0),
            traits: traits.clamp(0.0, 1.0),
            platforms: platforms.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReasoning {
    pub reasoning: String,
    pub confidence: ConfidenceScore,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPrinciples {
    pub warmth: Level,
    pub density: Density,
    pub clarity: Level,
    pub speed: Level,
    pub philosophy: Philosophy,
    #[serde(default)]
    pub inferred_users: Vec<String>,
    #[serde(default)]
    pub inferred_traits: Vec<String>,
    #[serde(default)]
    pub inferred_platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<AgentReasoning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_context: Option<IndustryContext>,
}

impl DesignPrinciples {
    /// Validate the integer scales and build principles with no inferred context.
    pub fn new(
        warmth: i64,
        density: Density,
        clarity: i64,
        speed: i64,
        philosophy: Philosophy,
    ) -> Result<Self> {
        Ok(Self {
            warmth: Level::for_field("warmth", warmth)?,
            density,
            clarity: Level::for_field("clarity", clarity)?,
            speed: Level::for_field("speed", speed)?,
            philosophy,
            inferred_users: Vec::new(),
            inferred_traits: Vec::new(),
            inferred_platforms: Vec::new(),
            reasoning: None,
            industry_context: None,
        })
    }

    pub fn with_industry_context(mut self, context: IndustryContext) -> Self {
        self.industry_context = Some(context);
        self
    }

    pub fn with_reasoning(mut self, reasoning: AgentReasoning) -> Self {
        self.reasoning = Some(reasoning);
        self
    }

    pub fn industry(&self) -> Industry {
        self.industry_context
            .as_ref()
            .map(|c| c.industry)
            .unwrap_or(Industry::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(Level::new(1).is_ok());
        assert!(Level::new(10).is_ok());
        assert!(Level::new(0).is_err());
        assert!(Level::new(11).is_err());
    }

    #[test]
    fn test_level_raised_is_capped() {
        let l = Level::new(8).unwrap();
        assert_eq!(l.raised(2, 9).get(), 9);
        assert_eq!(l.raised(1, 9).get(), 9);
        assert_eq!(Level::new(4).unwrap().raised(2, 9).get(), 6);
    }

    #[test]
    fn test_new_names_offending_field() {
        let err = DesignPrinciples::new(5, Density::Dense, 11, 5, Philosophy::BrandLed).unwrap_err();
        assert_eq!(err.to_string(), "clarity must be within 1..=10, got 11");
        let err = DesignPrinciples::new(0, Density::Dense, 5, 5, Philosophy::BrandLed).unwrap_err();
        assert!(err.to_string().starts_with("warmth"));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let json = serde_json::json!({
            "warmth": 12, "density": "dense", "clarity": 5, "speed": 5,
            "philosophy": "utility-first"
        });
        assert!(serde_json::from_value::<DesignPrinciples>(json).is_err());
    }

    #[test]
    fn test_serde_names() {
        let p = DesignPrinciples::new(2, Density::Spacious, 9, 7, Philosophy::UtilityFirst).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["density"], "spacious");
        assert_eq!(json["philosophy"], "utility-first");
        assert_eq!(json["warmth"], 2);
        assert_eq!(p.industry(), Industry::Unknown);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Brand_Led".parse::<Philosophy>().unwrap(), Philosophy::BrandLed);
        assert_eq!("DENSE".parse::<Density>().unwrap(), Density::Dense);
        assert!("cozy".parse::<Density>().is_err());
    }
}
