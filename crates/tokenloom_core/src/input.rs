//! Product brief supplied by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| CoreError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

string_enum!(TargetUser, "target user", {
    B2B => "B2B",
    B2C => "B2C",
    Enterprise => "enterprise",
    Consumer => "consumer",
});

string_enum!(BrandTrait, "brand trait", {
    Modern => "modern",
    Clinical => "clinical",
    Playful => "playful",
    Premium => "premium",
    Bold => "bold",
    Minimal => "minimal",
    Warm => "warm",
    Professional => "professional",
});

string_enum!(Platform, "platform", {
    Web => "web",
    Mobile => "mobile",
    Dashboard => "dashboard",
    Marketing => "marketing",
});

/// What the user asked for. Only `product_idea` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystemInput {
    pub product_idea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<TargetUser>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_traits: Option<Vec<BrandTrait>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
}

impl DesignSystemInput {
    pub fn new(product_idea: impl Into<String>) -> Self {
        Self {
            product_idea: product_idea.into(),
            target_users: None,
            brand_traits: None,
            platforms: None,
        }
    }

    pub fn with_target_users(mut self, users: Vec<TargetUser>) -> Self {
        self.target_users = Some(users);
        self
    }

    pub fn with_brand_traits(mut self, traits: Vec<BrandTrait>) -> Self {
        self.brand_traits = Some(traits);
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = Some(platforms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b2b".parse::<TargetUser>().unwrap(), TargetUser::B2B);
        assert_eq!("Playful".parse::<BrandTrait>().unwrap(), BrandTrait::Playful);
        assert_eq!(" web ".parse::<Platform>().unwrap(), Platform::Web);
    }

    #[test]
    fn test_unknown_variant() {
        let err = "whimsical".parse::<BrandTrait>().unwrap_err();
        assert_eq!(err.to_string(), "unknown brand trait: whimsical");
    }

    #[test]
    fn test_input_serde() {
        let input = DesignSystemInput::new("Clinic scheduling")
            .with_target_users(vec![TargetUser::Enterprise])
            .with_brand_traits(vec![BrandTrait::Clinical, BrandTrait::Minimal]);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["target_users"], serde_json::json!(["enterprise"]));
        assert_eq!(json["brand_traits"], serde_json::json!(["clinical", "minimal"]));
        assert!(json.get("platforms").is_none());
        let back: DesignSystemInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }
}
