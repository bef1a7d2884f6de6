//! Design token model. Tokens are immutable once emitted; collections keep insertion order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Neutral,
    Semantic,
    Accent,
}

impl ColorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Neutral => "neutral",
            ColorRole::Semantic => "semantic",
            ColorRole::Accent => "accent",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named color such as `primary-500`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub name: String,
    pub value: Rgb,
    pub role: ColorRole,
}

impl ColorToken {
    pub fn new(name: impl Into<String>, value: Rgb, role: ColorRole) -> Self {
        Self {
            name: name.into(),
            value,
            role,
        }
    }
}

/// First token with exactly this name.
pub fn find_color(colors: &[ColorToken], name: &str) -> Option<Rgb> {
    colors.iter().find(|t| t.name == name).map(|t| t.value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyRole {
    Heading,
    Body,
    Ui,
    Display,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyToken {
    pub name: String,
    pub family: String,
    /// CSS size, e.g. `15.0px`.
    pub size: String,
    pub weight: u16,
    pub line_height: f64,
    pub role: TypographyRole,
}

impl TypographyToken {
    /// Size in pixels when `size` is a `px` value.
    pub fn size_px(&self) -> Option<f64> {
        self.size.strip_suffix("px")?.trim().parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingToken {
    pub name: String,
    /// CSS length, e.g. `12px`.
    pub value: String,
    /// Position in the scale, starting at 1.
    pub scale: u8,
}

impl SpacingToken {
    pub fn px(&self) -> Option<u32> {
        self.value.strip_suffix("px")?.trim().parse().ok()
    }
}

/// Human-readable reasons behind each color family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRationale {
    pub primary: String,
    pub neutral: String,
    pub accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub overall: String,
}

/// Alternative primary/secondary pairing. Pure data, not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecommendation {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub colors: Vec<ColorToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_colors: Option<Vec<ColorToken>>,
    #[serde(default)]
    pub typography: Vec<TypographyToken>,
    #[serde(default)]
    pub spacing: Vec<SpacingToken>,
    #[serde(default)]
    pub border_radius: BTreeMap<String, String>,
    #[serde(default)]
    pub shadows: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_rationale: Option<ColorRationale>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<ColorRecommendation>,
}

impl DesignTokens {
    /// Token set with only light colors; everything else empty.
    pub fn from_colors(colors: Vec<ColorToken>) -> Self {
        Self {
            colors,
            dark_colors: None,
            typography: Vec::new(),
            spacing: Vec::new(),
            border_radius: BTreeMap::new(),
            shadows: BTreeMap::new(),
            color_rationale: None,
            recommendations: Vec::new(),
        }
    }

    pub fn color(&self, name: &str) -> Option<Rgb> {
        find_color(&self.colors, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_token_json_shape() {
        let token = ColorToken::new("primary-500", Rgb(0x25, 0x63, 0xeb), ColorRole::Primary);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "primary-500", "value": "#2563eb", "role": "primary" })
        );
    }

    #[test]
    fn test_tokens_from_minimal_json() {
        let tokens: DesignTokens = serde_json::from_str(
            r##"{ "colors": [ { "name": "success-500", "value": "#15803D", "role": "semantic" } ] }"##,
        )
        .unwrap();
        assert_eq!(tokens.color("success-500"), Some(Rgb(0x15, 0x80, 0x3d)));
        assert!(tokens.typography.is_empty());
        assert!(tokens.recommendations.is_empty());
    }

    #[test]
    fn test_rejects_bad_hex_in_tokens() {
        let result: Result<DesignTokens, _> = serde_json::from_str(
            r#"{ "colors": [ { "name": "primary-500", "value": "blue", "role": "primary" } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_find_color_is_exact_match() {
        let colors = vec![
            ColorToken::new("primary-50", Rgb(1, 1, 1), ColorRole::Primary),
            ColorToken::new("primary-500", Rgb(2, 2, 2), ColorRole::Primary),
        ];
        assert_eq!(find_color(&colors, "primary-500"), Some(Rgb(2, 2, 2)));
        assert_eq!(find_color(&colors, "primary-5"), None);
    }

    #[test]
    fn test_size_parsing() {
        let t = TypographyToken {
            name: "body-2".into(),
            family: "Inter".into(),
            size: "15.0px".into(),
            weight: 400,
            line_height: 1.5,
            role: TypographyRole::Body,
        };
        assert_eq!(t.size_px(), Some(15.0));
        let s = SpacingToken {
            name: "space-1".into(),
            value: "6px".into(),
            scale: 1,
        };
        assert_eq!(s.px(), Some(6));
    }
}
