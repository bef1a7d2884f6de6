use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid hex color: {0:?} (expected #RRGGBB)")]
    InvalidHex(String),

    #[error("{field} must be within 1..=10, got {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_error() {
        let err = CoreError::InvalidHex("blue".to_string());
        assert_eq!(err.to_string(), "invalid hex color: \"blue\" (expected #RRGGBB)");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = CoreError::OutOfRange {
            field: "warmth",
            value: 11,
        };
        assert_eq!(err.to_string(), "warmth must be within 1..=10, got 11");
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = CoreError::UnknownVariant {
            kind: "density",
            value: "cozy".to_string(),
        };
        assert_eq!(err.to_string(), "unknown density: cozy");
    }
}
