//! Rule-based design strategist: turns a product brief into [`DesignPrinciples`].

use tracing::debug;

use crate::input::{BrandTrait, DesignSystemInput, Platform, TargetUser};
use crate::knowledge::{self, Industry};
use crate::principles::{AgentReasoning, ConfidenceScore, DesignPrinciples, Philosophy};

/// Audience assumed when the brief names none.
pub fn default_users(industry: Industry) -> Vec<TargetUser> {
    match industry {
        Industry::Healthcare | Industry::Finance => vec![TargetUser::Enterprise, TargetUser::B2B],
        Industry::Ecommerce | Industry::Consumer => vec![TargetUser::Consumer, TargetUser::B2C],
        _ => vec![TargetUser::B2B],
    }
}

/// Personality assumed when the brief names none.
pub fn default_traits(industry: Industry) -> Vec<BrandTrait> {
    match industry {
        Industry::Healthcare | Industry::Finance | Industry::Enterprise => {
            vec![BrandTrait::Professional, BrandTrait::Minimal]
        }
        Industry::Ecommerce | Industry::Consumer | Industry::Marketing => {
            vec![BrandTrait::Modern, BrandTrait::Bold]
        }
        _ => vec![BrandTrait::Modern, BrandTrait::Professional],
    }
}

/// Drop traits that clash with the industry. Returns the kept traits and the conflicts found.
pub fn resolve_trait_conflicts(
    industry: Industry,
    traits: Vec<BrandTrait>,
) -> (Vec<BrandTrait>, Vec<String>) {
    let conflicts = knowledge::check_trait_conflicts(&traits);
    if conflicts.is_empty() {
        return (traits, conflicts);
    }

    let resolved = match industry {
        Industry::Healthcare | Industry::Finance => {
            let mut kept: Vec<_> = traits
                .into_iter()
                .filter(|t| !matches!(t, BrandTrait::Playful | BrandTrait::Bold))
                .collect();
            if !kept.contains(&BrandTrait::Professional) {
                kept.push(BrandTrait::Professional);
            }
            kept
        }
        Industry::Marketing | Industry::Consumer => traits
            .into_iter()
            .filter(|t| !matches!(t, BrandTrait::Clinical | BrandTrait::Minimal))
            .collect(),
        _ => traits,
    };
    (resolved, conflicts)
}

fn names<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Derive principles from industry defaults and the brief, without a model.
pub fn derive_principles(input: &DesignSystemInput) -> DesignPrinciples {
    let industry = knowledge::detect_industry(&input.product_idea);
    let context = knowledge::industry_context(industry);

    let users = match &input.target_users {
        Some(users) if !users.is_empty() => users.clone(),
        _ => default_users(industry),
    };
    let traits = match &input.brand_traits {
        Some(traits) if !traits.is_empty() => traits.clone(),
        _ => default_traits(industry),
    };
    let (traits, conflicts) = resolve_trait_conflicts(industry, traits);
    let platforms = match &input.platforms {
        Some(platforms) if !platforms.is_empty() => platforms.clone(),
        _ => vec![Platform::Web],
    };

    let mut philosophy = context.philosophy;
    let mut warmth = context.warmth;
    if !industry.is_regulated() {
        if traits.contains(&BrandTrait::Playful) {
            philosophy = Philosophy::BrandLed;
            warmth = warmth.raised(2, 9);
        } else if traits.contains(&BrandTrait::Bold) {
            philosophy = Philosophy::BrandLed;
            warmth = warmth.raised(1, 9);
        }
    }

    debug!(
        industry = %industry,
        philosophy = %philosophy,
        warmth = warmth.get(),
        conflicts = conflicts.len(),
        "derived principles from rules"
    );

    let reasoning = AgentReasoning {
        reasoning: format!(
            "Design principles derived from industry analysis ({industry}) and product requirements. \
             Industry standards applied with adjustments for user-provided preferences."
        ),
        confidence: ConfidenceScore::new(
            if users.is_empty() { 0.5 } else { 0.7 },
            if traits.is_empty() { 0.5 } else { 0.7 },
            0.6,
        ),
        overrides: conflicts,
    };

    DesignPrinciples {
        warmth,
        density: context.density,
        clarity: context.clarity,
        speed: context.speed,
        philosophy,
        inferred_users: names(&users),
        inferred_traits: names(&traits),
        inferred_platforms: names(&platforms),
        reasoning: Some(reasoning),
        industry_context: Some(context),
    }
}
