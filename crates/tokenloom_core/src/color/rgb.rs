//! RGB color at the engine boundary. Parsed once from `#RRGGBB`, serialized back as lowercase hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// 8-bit sRGB triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Parse a 7-character `#RRGGBB` string (hex digits in either case).
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Channels scaled into `[0, 1]`.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }

    /// Tuple `(r, g, b)` for terminal color APIs.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s.trim())
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Rgb::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case() {
        assert_eq!(Rgb::from_hex("#2563EB").unwrap(), Rgb(0x25, 0x63, 0xeb));
        assert_eq!(Rgb::from_hex("#2563eb").unwrap(), Rgb(0x25, 0x63, 0xeb));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["2563EB", "#2563E", "#2563EBB", "#25G3EB", "", "#"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(CoreError::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(Rgb(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_unit_channels() {
        let (r, g, b) = Rgb(255, 0, 51).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb(255, 255, 255)).unwrap();
        assert_eq!(json, "\"#ffffff\"");
        let back: Rgb = serde_json::from_str("\"#FFFFFF\"").unwrap();
        assert_eq!(back, Rgb(255, 255, 255));
        assert!(serde_json::from_str::<Rgb>("\"white\"").is_err());
    }
}
