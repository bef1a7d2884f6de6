//! Cross-checks between pipeline stages and the refinement decision.

use std::collections::BTreeMap;

use crate::principles::DesignPrinciples;
use crate::tokens::DesignTokens;
use crate::validation::{
    ValidationResult, validate_color_accessibility, validate_design_consistency,
};

pub const PRINCIPLES_TOKENS: &str = "principles_tokens";
pub const TOKENS_ACCESSIBILITY: &str = "tokens_accessibility";

/// Quality below which a run is considered for refinement.
pub const DEFAULT_REFINE_THRESHOLD: f64 = 0.7;

pub type ValidationReport = BTreeMap<String, ValidationResult>;

/// Run every cross-stage check, keyed by check name.
pub fn cross_check(principles: &DesignPrinciples, tokens: &DesignTokens) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.insert(
        PRINCIPLES_TOKENS.to_string(),
        validate_design_consistency(principles, tokens),
    );
    report.insert(
        TOKENS_ACCESSIBILITY.to_string(),
        validate_color_accessibility(&tokens.colors),
    );
    report
}

/// Mean score across results; 0 when there are none.
pub fn quality_score(report: &ValidationReport) -> f64 {
    if report.is_empty() {
        return 0.0;
    }
    report.values().map(|r| r.score).sum::<f64>() / report.len() as f64
}

pub fn should_refine(report: &ValidationReport, threshold: f64) -> bool {
    quality_score(report) < threshold
}

/// Refinement hook. Never produces replacement tokens, whatever the result says.
pub fn refine_tokens(_tokens: &DesignTokens, _result: &ValidationResult) -> Option<DesignTokens> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::VisualIdentity;
    use crate::principles::{Density, Philosophy};

    fn result(score: f64) -> ValidationResult {
        ValidationResult {
            valid: true,
            issues: Vec::new(),
            warnings: Vec::new(),
            score,
        }
    }

    #[test]
    fn test_quality_score_is_mean() {
        let mut report = ValidationReport::new();
        assert_eq!(quality_score(&report), 0.0);
        report.insert("a".into(), result(1.0));
        report.insert("b".into(), result(0.5));
        assert!((quality_score(&report) - 0.75).abs() < 1e-12);
        assert!(!should_refine(&report, DEFAULT_REFINE_THRESHOLD));
        assert!(should_refine(&report, 0.8));
    }

    #[test]
    fn test_cross_check_keys() {
        let p = DesignPrinciples::new(5, Density::Balanced, 8, 7, Philosophy::ComponentFirst).unwrap();
        let tokens = VisualIdentity::new(&p, "Notes app").generate(None);
        let report = cross_check(&p, &tokens);
        let keys: Vec<_> = report.keys().map(String::as_str).collect();
        assert_eq!(keys, [PRINCIPLES_TOKENS, TOKENS_ACCESSIBILITY]);
        assert!(report[TOKENS_ACCESSIBILITY].valid);
    }

    #[test]
    fn test_refine_is_a_no_op() {
        let tokens = DesignTokens::from_colors(Vec::new());
        let failing = ValidationResult {
            valid: false,
            issues: vec!["bad".into()],
            warnings: Vec::new(),
            score: 0.0,
        };
        assert!(refine_tokens(&tokens, &failing).is_none());
        assert!(refine_tokens(&tokens, &result(1.0)).is_none());
    }
}
