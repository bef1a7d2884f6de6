//! Prompts for the two model-backed steps.
//!
//! The JSON-only instruction is appended by `tokenloom-llm`, so these only describe the task
//! and the expected object.

use tokenloom_core::knowledge::IndustryColors;
use tokenloom_core::{DesignPrinciples, DesignSystemInput, IndustryContext};
use tokenloom_llm::CompletionRequest;

const STRATEGIST_SYSTEM: &str = "You are a senior design strategist. You define the core \
principles of a design system from a short product brief, using industry norms as a baseline \
and overriding user inputs that conflict with them.";

const COLOR_SYSTEM: &str = "You are a senior UI designer specializing in accessible color \
systems for digital products.";

fn listed<T: ToString>(items: Option<&Vec<T>>) -> String {
    match items {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        _ => "Not provided - infer from the description".to_string(),
    }
}

pub fn strategist_prompt(input: &DesignSystemInput, context: &IndustryContext) -> CompletionRequest {
    let user = format!(
        r#"Define design principles for this product.

PRODUCT DESCRIPTION: {idea}
DETECTED INDUSTRY: {industry}
TARGET USERS: {users}
BRAND TRAITS: {traits}
PLATFORMS: {platforms}

INDUSTRY DEFAULTS:
- philosophy: {philosophy}
- density: {density}
- warmth: {warmth}/10
- clarity: {clarity}/10
- speed: {speed}/10

GUIDANCE:
- clarity (1-10): how critical legibility is. Healthcare and finance are 10, marketing is 7.
- density: data-heavy products are dense, consumer products balanced, healthcare spacious.
- warmth (1-10): clinical is 3, consumer 7, marketing 8.
- speed (1-10): dashboards 9, marketing 6.
- philosophy: utility-first for data and enterprise, brand-led for consumer and marketing, component-first for SaaS.
- Override provided traits that conflict with the industry (for example "playful" for healthcare) and say so in "overrides".

OUTPUT FORMAT:
{{
  "clarity": <1-10>,
  "density": "<dense|balanced|spacious>",
  "warmth": <1-10>,
  "speed": <1-10>,
  "philosophy": "<utility-first|component-first|brand-led>",
  "inferred_users": ["<B2B|B2C|enterprise|consumer>", ...],
  "inferred_traits": ["<trait>", ...],
  "inferred_platforms": ["<web|mobile|dashboard|marketing>", ...],
  "reasoning": "<2-3 sentences>",
  "confidence": {{ "users": <0-1>, "traits": <0-1>, "platforms": <0-1> }},
  "overrides": ["<input you overrode and why>"]
}}"#,
        idea = input.product_idea.trim(),
        industry = context.industry,
        users = listed(input.target_users.as_ref()),
        traits = listed(input.brand_traits.as_ref()),
        platforms = listed(input.platforms.as_ref()),
        philosophy = context.philosophy,
        density = context.density,
        warmth = context.warmth,
        clarity = context.clarity,
        speed = context.speed,
    );
    CompletionRequest::new(STRATEGIST_SYSTEM, user)
}

fn warmth_label(warmth: u8) -> &'static str {
    match warmth {
        0..=3 => "cool",
        7.. => "warm",
        _ => "neutral",
    }
}

pub fn color_prompt(
    principles: &DesignPrinciples,
    suggestion: Option<&IndustryColors>,
    requirements: &[&str],
) -> CompletionRequest {
    let guidance = suggestion
        .map(|c| {
            format!(
                "\nINDUSTRY COLOR GUIDANCE:\n- Suggested primary: {}\n- Suggested accent: {}\n- Rationale: {}\nUse these as inspiration, not as the answer.\n",
                c.primary, c.accent, c.rationale
            )
        })
        .unwrap_or_default();

    let user = format!(
        r##"Create a color palette for this design system.

DESIGN PRINCIPLES:
- philosophy: {philosophy}
- warmth: {warmth}/10 ({label})
- density: {density}
- clarity: {clarity}/10 (high clarity requires high contrast)

INDUSTRY: {industry}
ACCESSIBILITY: {requirements}
{guidance}
RULES:
- primary must reach 4.5:1 contrast on white; pick lightness between 0.3 and 0.5.
- neutral must work for text, backgrounds and borders; its darkest steps carry body text.
- avoid combinations that rely on red versus green alone.
- every color is a "#RRGGBB" hex string.

OUTPUT FORMAT:
{{
  "primary": "#RRGGBB",
  "neutral": "#RRGGBB",
  "accent": "#RRGGBB",
  "rationale": "<2-3 sentences on how the colors support the principles>"
}}"##,
        philosophy = principles.philosophy,
        warmth = principles.warmth,
        label = warmth_label(principles.warmth.get()),
        density = principles.density,
        clarity = principles.clarity,
        industry = principles.industry(),
        requirements = requirements.join(", "),
    );
    CompletionRequest::new(COLOR_SYSTEM, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenloom_core::knowledge::{industry_colors, industry_context};
    use tokenloom_core::{BrandTrait, Density, Industry, Philosophy};

    #[test]
    fn test_strategist_prompt_marks_missing_inputs() {
        let input = DesignSystemInput::new("Patient intake for a rural clinic")
            .with_brand_traits(vec![BrandTrait::Playful]);
        let request = strategist_prompt(&input, &industry_context(Industry::Healthcare));
        assert!(request.user_prompt.contains("DETECTED INDUSTRY: healthcare"));
        assert!(request.user_prompt.contains("BRAND TRAITS: playful"));
        assert!(request.user_prompt.contains("TARGET USERS: Not provided"));
        assert!(request.user_prompt.contains("\"clarity\": <1-10>"));
    }

    #[test]
    fn test_color_prompt_includes_guidance_and_clarity() {
        let principles =
            DesignPrinciples::new(2, Density::Spacious, 10, 9, Philosophy::UtilityFirst).unwrap();
        let suggestion = industry_colors(Industry::Finance);
        let request = color_prompt(&principles, suggestion.as_ref(), &["WCAG 2.1 AA"]);
        assert!(request.user_prompt.contains("warmth: 2/10 (cool)"));
        assert!(request.user_prompt.contains("clarity: 10/10"));
        assert!(request.user_prompt.contains("INDUSTRY COLOR GUIDANCE"));
        assert!(request.user_prompt.contains("ACCESSIBILITY: WCAG 2.1 AA"));
        assert!(request.user_prompt.contains("every color is a \"#RRGGBB\" hex string"));
        assert!(request.user_prompt.contains("  \"primary\": \"#RRGGBB\","));
        assert!(request.user_prompt.trim_end().ends_with('}'));

        let request = color_prompt(&principles, None, &[]);
        assert!(!request.user_prompt.contains("INDUSTRY COLOR GUIDANCE"));
    }
}
