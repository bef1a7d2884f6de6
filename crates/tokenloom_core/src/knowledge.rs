//! Industry knowledge: keyword detection and per-industry design defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::CoreError;
use crate::input::BrandTrait;
use crate::principles::{Density, IndustryContext, Level, Philosophy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Ecommerce,
    Saas,
    Healthcare,
    Finance,
    Education,
    Marketing,
    Dashboard,
    MobileApp,
    Enterprise,
    Consumer,
    #[default]
    Unknown,
}

impl Industry {
    pub const ALL: &'static [Industry] = &[
        Industry::Ecommerce,
        Industry::Saas,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Marketing,
        Industry::Dashboard,
        Industry::MobileApp,
        Industry::Enterprise,
        Industry::Consumer,
        Industry::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Ecommerce => "ecommerce",
            Industry::Saas => "saas",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Education => "education",
            Industry::Marketing => "marketing",
            Industry::Dashboard => "dashboard",
            Industry::MobileApp => "mobile_app",
            Industry::Enterprise => "enterprise",
            Industry::Consumer => "consumer",
            Industry::Unknown => "unknown",
        }
    }

    /// Regulated industries where trust outweighs personality.
    pub fn is_regulated(&self) -> bool {
        matches!(self, Industry::Healthcare | Industry::Finance)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "industry",
                value: s.to_string(),
            })
    }
}

/// Detection order matters: the first matching group wins.
const KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Healthcare,
        &[
            "health",
            "medical",
            "patient",
            "clinic",
            "hospital",
            "doctor",
            "nurse",
            "diagnosis",
            "treatment",
        ],
    ),
    (
        Industry::Finance,
        &[
            "finance",
            "banking",
            "payment",
            "transaction",
            "investment",
            "trading",
            "wallet",
            "credit",
            "loan",
        ],
    ),
    (
        Industry::Ecommerce,
        &[
            "shop",
            "store",
            "cart",
            "checkout",
            "product",
            "inventory",
            "retail",
            "ecommerce",
            "e-commerce",
            "purchase",
            "buy",
        ],
    ),
    (
        Industry::Saas,
        &[
            "saas",
            "software",
            "platform",
            "tool",
            "app",
            "dashboard",
            "analytics",
            "crm",
            "management",
        ],
    ),
    (
        Industry::Education,
        &[
            "education",
            "learning",
            "course",
            "student",
            "teacher",
            "school",
            "university",
            "tutorial",
            "lesson",
        ],
    ),
    (
        Industry::Marketing,
        &[
            "marketing",
            "landing",
            "campaign",
            "promotion",
            "advertising",
            "brand",
            "social media",
        ],
    ),
    (
        Industry::Enterprise,
        &["enterprise", "b2b", "business", "corporate", "organization", "company"],
    ),
    (
        Industry::Consumer,
        &["consumer", "b2c", "user", "personal", "individual"],
    ),
];

/// Classify a product idea by substring keywords.
pub fn detect_industry(product_idea: &str) -> Industry {
    let idea = product_idea.to_lowercase();
    for (industry, words) in KEYWORDS {
        if words.iter().any(|w| idea.contains(w)) {
            // Software ideas that are mostly about data are dashboards.
            if *industry == Industry::Saas
                && (idea.contains("dashboard") || idea.contains("analytics"))
            {
                return Industry::Dashboard;
            }
            return *industry;
        }
    }
    Industry::Unknown
}

/// Suggested palette seeds for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryColors {
    pub primary: Rgb,
    pub accent: Rgb,
    pub neutral: Rgb,
    pub rationale: &'static str,
}

pub fn industry_colors(industry: Industry) -> Option<IndustryColors> {
    let (primary, accent, neutral, rationale) = match industry {
        Industry::Healthcare => (
            Rgb(0x25, 0x63, 0xeb),
            Rgb(0x10, 0xb9, 0x81),
            Rgb(0x64, 0x74, 0x8b),
            "Blues and greens convey trust, cleanliness, and care",
        ),
        Industry::Finance => (
            Rgb(0x1e, 0x40, 0xaf),
            Rgb(0x05, 0x96, 0x69),
            Rgb(0x47, 0x55, 0x69),
            "Deep blues suggest stability, security, and professionalism",
        ),
        Industry::Ecommerce => (
            Rgb(0xdc, 0x26, 0x26),
            Rgb(0xf5, 0x9e, 0x0b),
            Rgb(0x6b, 0x72, 0x80),
            "Warm colors encourage action and purchase decisions",
        ),
        Industry::Saas => (
            Rgb(0x63, 0x66, 0xf1),
            Rgb(0x8b, 0x5c, 0xf6),
            Rgb(0x64, 0x74, 0x8b),
            "Modern tech colors suggest innovation and efficiency",
        ),
        Industry::Education => (
            Rgb(0x02, 0x84, 0xc7),
            Rgb(0xf5, 0x9e, 0x0b),
            Rgb(0x64, 0x74, 0x8b),
            "Friendly blues with energetic accents promote engagement",
        ),
        Industry::Marketing => (
            Rgb(0xec, 0x48, 0x99),
            Rgb(0xf5, 0x9e, 0x0b),
            Rgb(0x6b, 0x72, 0x80),
            "Vibrant colors capture attention and convey energy",
        ),
        Industry::Dashboard => (
            Rgb(0x3b, 0x82, 0xf6),
            Rgb(0x10, 0xb9, 0x81),
            Rgb(0x47, 0x55, 0x69),
            "Cool colors reduce eye strain for data-heavy interfaces",
        ),
        Industry::Enterprise => (
            Rgb(0x1e, 0x40, 0xaf),
            Rgb(0x63, 0x66, 0xf1),
            Rgb(0x33, 0x41, 0x55),
            "Conservative colors convey reliability and professionalism",
        ),
        Industry::Consumer => (
            Rgb(0xdc, 0x26, 0x26),
            Rgb(0xf5, 0x9e, 0x0b),
            Rgb(0x6b, 0x72, 0x80),
            "Warm, approachable colors encourage interaction",
        ),
        Industry::MobileApp | Industry::Unknown => return None,
    };
    Some(IndustryColors {
        primary,
        accent,
        neutral,
        rationale,
    })
}

pub fn philosophy_for(industry: Industry) -> Philosophy {
    match industry {
        Industry::Healthcare | Industry::Finance | Industry::Enterprise | Industry::Dashboard => {
            Philosophy::UtilityFirst
        }
        Industry::Ecommerce | Industry::Marketing | Industry::Consumer => Philosophy::BrandLed,
        _ => Philosophy::ComponentFirst,
    }
}

pub fn density_for(industry: Industry) -> Density {
    match industry {
        Industry::Healthcare | Industry::Finance | Industry::Enterprise | Industry::Marketing => {
            Density::Spacious
        }
        Industry::Dashboard => Density::Dense,
        _ => Density::Balanced,
    }
}

/// Returns `(warmth, clarity, speed)`.
fn scales_for(industry: Industry) -> (u8, u8, u8) {
    match industry {
        Industry::Healthcare => (4, 10, 9),
        Industry::Finance => (3, 10, 9),
        Industry::Enterprise => (3, 9, 8),
        Industry::Dashboard => (4, 9, 9),
        Industry::Saas => (6, 8, 8),
        Industry::Ecommerce => (7, 8, 7),
        Industry::Marketing => (8, 7, 6),
        Industry::Consumer => (7, 8, 7),
        Industry::Education => (6, 9, 7),
        Industry::MobileApp | Industry::Unknown => (5, 8, 7),
    }
}

pub fn warmth_for(industry: Industry) -> Level {
    Level::saturating(i64::from(scales_for(industry).0))
}

pub fn clarity_for(industry: Industry) -> Level {
    Level::saturating(i64::from(scales_for(industry).1))
}

pub fn speed_for(industry: Industry) -> Level {
    Level::saturating(i64::from(scales_for(industry).2))
}

/// All defaults for `industry` in one record.
pub fn industry_context(industry: Industry) -> IndustryContext {
    IndustryContext {
        industry,
        philosophy: philosophy_for(industry),
        density: density_for(industry),
        warmth: warmth_for(industry),
        clarity: clarity_for(industry),
        speed: speed_for(industry),
    }
}

fn conflicts_of(brand_trait: BrandTrait) -> &'static [BrandTrait] {
    match brand_trait {
        BrandTrait::Clinical => &[BrandTrait::Playful, BrandTrait::Bold],
        BrandTrait::Professional => &[BrandTrait::Playful],
        BrandTrait::Minimal => &[BrandTrait::Bold],
        BrandTrait::Playful => &[BrandTrait::Clinical, BrandTrait::Professional],
        _ => &[],
    }
}

/// Human-readable conflicts, one per ordered pair found.
pub fn check_trait_conflicts(traits: &[BrandTrait]) -> Vec<String> {
    let mut conflicts = Vec::new();
    for t in traits {
        for other in conflicts_of(*t) {
            if traits.contains(other) {
                conflicts.push(format!("{t} conflicts with {other}"));
            }
        }
    }
    conflicts
}

pub fn accessibility_requirements(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Healthcare => &["WCAG 2.1 AAA", "High contrast", "Screen reader optimized"],
        Industry::Finance => &["WCAG 2.1 AA", "Keyboard navigation", "High contrast"],
        Industry::Enterprise | Industry::Ecommerce => &["WCAG 2.1 AA", "Keyboard navigation"],
        Industry::Dashboard => &["WCAG 2.1 AA", "Color blind friendly"],
        Industry::Education => &["WCAG 2.1 AA", "Screen reader optimized"],
        _ => &["WCAG 2.1 AA"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_priority_order() {
        // "patient" beats "payment"
        assert_eq!(detect_industry("Patient payment portal"), Industry::Healthcare);
        assert_eq!(detect_industry("Crypto wallet"), Industry::Finance);
        assert_eq!(detect_industry("Online shop for plants"), Industry::Ecommerce);
        assert_eq!(detect_industry("CRM for logistics teams"), Industry::Saas);
        assert_eq!(detect_industry("Analytics tool for ops"), Industry::Dashboard);
        assert_eq!(detect_industry("Online course catalog"), Industry::Education);
        assert_eq!(detect_industry("Campaign landing page"), Industry::Marketing);
        assert_eq!(detect_industry("Corporate intranet"), Industry::Enterprise);
        assert_eq!(detect_industry("Personal journal"), Industry::Consumer);
        assert_eq!(detect_industry("Quiet garden"), Industry::Unknown);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_industry("HOSPITAL rota"), Industry::Healthcare);
    }

    #[test]
    fn test_defaults_for_unknown() {
        let ctx = industry_context(Industry::Unknown);
        assert_eq!(ctx.philosophy, Philosophy::ComponentFirst);
        assert_eq!(ctx.density, Density::Balanced);
        assert_eq!(ctx.warmth.get(), 5);
        assert_eq!(ctx.clarity.get(), 8);
        assert_eq!(ctx.speed.get(), 7);
        assert!(industry_colors(Industry::Unknown).is_none());
        assert_eq!(accessibility_requirements(Industry::Unknown), &["WCAG 2.1 AA"]);
    }

    #[test]
    fn test_healthcare_defaults() {
        let ctx = industry_context(Industry::Healthcare);
        assert_eq!(ctx.philosophy, Philosophy::UtilityFirst);
        assert_eq!(ctx.density, Density::Spacious);
        assert_eq!(ctx.clarity.get(), 10);
        let colors = industry_colors(Industry::Healthcare).unwrap();
        assert_eq!(colors.primary.to_hex(), "#2563eb");
        assert_eq!(accessibility_requirements(Industry::Healthcare)[0], "WCAG 2.1 AAA");
    }

    #[test]
    fn test_trait_conflicts() {
        let conflicts = check_trait_conflicts(&[BrandTrait::Clinical, BrandTrait::Playful]);
        assert_eq!(
            conflicts,
            vec![
                "clinical conflicts with playful".to_string(),
                "playful conflicts with clinical".to_string()
            ]
        );
        assert!(check_trait_conflicts(&[BrandTrait::Modern, BrandTrait::Warm]).is_empty());
    }

    #[test]
    fn test_industry_parse_and_serde() {
        assert_eq!("mobile_app".parse::<Industry>().unwrap(), Industry::MobileApp);
        assert!("space".parse::<Industry>().is_err());
        assert_eq!(serde_json::to_value(Industry::MobileApp).unwrap(), "mobile_app");
    }
}
