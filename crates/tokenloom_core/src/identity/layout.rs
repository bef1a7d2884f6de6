//! Typography, spacing, radius and shadow tokens derived from principles.

use std::collections::BTreeMap;

use crate::principles::{Density, DesignPrinciples, Philosophy};
use crate::tokens::{SpacingToken, TypographyRole, TypographyToken};

const SYSTEM_STACK: &str = "system-ui, sans-serif";
const INTER_STACK: &str = "Inter, system-ui, sans-serif";

/// Smallest body size allowed when clarity is 9 or above.
const HIGH_CLARITY_MIN_SIZE: f64 = 15.0;

fn font_family(philosophy: Philosophy) -> &'static str {
    match philosophy {
        Philosophy::UtilityFirst => SYSTEM_STACK,
        Philosophy::BrandLed | Philosophy::ComponentFirst => INTER_STACK,
    }
}

/// Returns `(base size px, modular scale ratio)`.
fn type_scale(principles: &DesignPrinciples) -> (f64, f64) {
    let (base, ratio) = match principles.density {
        Density::Dense => (14.0, 1.2),
        Density::Spacious => (16.0, 1.25),
        Density::Balanced => (15.0, 1.22),
    };
    if principles.clarity.get() >= 9 {
        (f64::max(base, HIGH_CLARITY_MIN_SIZE), ratio)
    } else {
        (base, ratio)
    }
}

fn px(size: f64) -> String {
    format!("{size:.1}px")
}

/// `body-0..=body-5`, `heading-1..=heading-6`, then `ui-small`.
pub fn typography(principles: &DesignPrinciples) -> Vec<TypographyToken> {
    let family = font_family(principles.philosophy);
    let (base, ratio) = type_scale(principles);
    let mut tokens = Vec::with_capacity(13);

    for i in -2..4 {
        tokens.push(TypographyToken {
            name: format!("body-{}", i + 2),
            family: family.to_string(),
            size: px(base * ratio.powi(i)),
            weight: 400,
            line_height: 1.5,
            role: TypographyRole::Body,
        });
    }

    for i in 1..=6 {
        tokens.push(TypographyToken {
            name: format!("heading-{i}"),
            family: family.to_string(),
            size: px(base * ratio.powi(i + 1)),
            weight: if i <= 3 { 600 } else { 500 },
            line_height: 1.2,
            role: TypographyRole::Heading,
        });
    }

    tokens.push(TypographyToken {
        name: "ui-small".to_string(),
        family: family.to_string(),
        size: "12px".to_string(),
        weight: 400,
        line_height: 1.4,
        role: TypographyRole::Ui,
    });
    tokens
}

pub fn spacing_unit(density: Density) -> u32 {
    match density {
        Density::Dense => 4,
        Density::Balanced => 6,
        Density::Spacious => 8,
    }
}

/// `space-1..=space-16`, multiples of the density unit.
pub fn spacing(principles: &DesignPrinciples) -> Vec<SpacingToken> {
    let unit = spacing_unit(principles.density);
    (1..=16u8)
        .map(|i| SpacingToken {
            name: format!("space-{i}"),
            value: format!("{}px", unit * u32::from(i)),
            scale: i,
        })
        .collect()
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn border_radius(philosophy: Philosophy) -> BTreeMap<String, String> {
    let (small, medium, large) = match philosophy {
        Philosophy::BrandLed => ("4px", "8px", "16px"),
        Philosophy::UtilityFirst => ("2px", "4px", "6px"),
        Philosophy::ComponentFirst => ("6px", "12px", "24px"),
    };
    map(&[
        ("small", small),
        ("medium", medium),
        ("large", large),
        ("round", "9999px"),
    ])
}

pub fn shadows(density: Density) -> BTreeMap<String, String> {
    match density {
        Density::Dense => map(&[
            ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
            ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1)"),
            ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1)"),
        ]),
        _ => map(&[
            ("sm", "0 1px 3px 0 rgb(0 0 0 / 0.1)"),
            (
                "md",
                "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            ),
            (
                "lg",
                "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principles(density: Density, clarity: i64, philosophy: Philosophy) -> DesignPrinciples {
        DesignPrinciples::new(5, density, clarity, 7, philosophy).unwrap()
    }

    #[test]
    fn test_typography_names_and_sizes() {
        let tokens = typography(&principles(Density::Balanced, 8, Philosophy::ComponentFirst));
        assert_eq!(tokens.len(), 13);
        assert_eq!(tokens[2].name, "body-2");
        assert_eq!(tokens[2].size, "15.0px");
        assert_eq!(tokens[6].name, "heading-1");
        assert_eq!(tokens[6].weight, 600);
        assert_eq!(tokens[11].weight, 500);
        assert_eq!(tokens[12].name, "ui-small");
        assert_eq!(tokens[0].family, INTER_STACK);
    }

    #[test]
    fn test_high_clarity_raises_dense_base() {
        let tokens = typography(&principles(Density::Dense, 9, Philosophy::UtilityFirst));
        assert_eq!(tokens[2].size, "15.0px");
        assert_eq!(tokens[0].family, SYSTEM_STACK);
        let low = typography(&principles(Density::Dense, 5, Philosophy::UtilityFirst));
        assert_eq!(low[2].size, "14.0px");
    }

    #[test]
    fn test_spacing_scale() {
        let tokens = spacing(&principles(Density::Spacious, 8, Philosophy::BrandLed));
        assert_eq!(tokens.len(), 16);
        assert_eq!(tokens[0].value, "8px");
        assert_eq!(tokens[15].value, "128px");
        assert_eq!(tokens[15].scale, 16);
    }

    #[test]
    fn test_radius_and_shadows() {
        assert_eq!(border_radius(Philosophy::UtilityFirst)["large"], "6px");
        assert_eq!(border_radius(Philosophy::BrandLed)["round"], "9999px");
        assert_eq!(shadows(Density::Dense)["sm"], "0 1px 2px 0 rgb(0 0 0 / 0.05)");
        assert_eq!(shadows(Density::Balanced).len(), 3);
    }
}
