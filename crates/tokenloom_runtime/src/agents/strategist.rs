use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tokenloom_core::knowledge::{detect_industry, industry_context};
use tokenloom_core::strategist::{default_traits, default_users, resolve_trait_conflicts};
use tokenloom_core::{
    AgentReasoning, ConfidenceScore, Density, DesignPrinciples, DesignSystemInput, IndustryContext,
    Level, Philosophy, derive_principles,
};
use tokenloom_llm::{ModelClient, RequestLimits};
use tokenloom_observability::agent_span;
use tracing::{Instrument, Span, warn};

use crate::prompt::strategist_prompt;

const DEFAULT_CONFIDENCE: f64 = 0.8;
const DEFAULT_REASONING: &str =
    "Design principles derived from product analysis and industry standards.";

/// Shape of the strategist's answer. Every field is optional; gaps come from industry defaults.
#[derive(Debug, Default, Deserialize)]
struct StrategistReply {
    clarity: Option<f64>,
    density: Option<String>,
    warmth: Option<f64>,
    speed: Option<f64>,
    philosophy: Option<String>,
    #[serde(default)]
    inferred_users: Vec<String>,
    #[serde(default)]
    inferred_traits: Vec<String>,
    #[serde(default)]
    inferred_platforms: Vec<String>,
    reasoning: Option<String>,
    confidence: Option<ReplyConfidence>,
    #[serde(default)]
    overrides: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyConfidence {
    users: Option<f64>,
    traits: Option<f64>,
    platforms: Option<f64>,
}

/// Scores outside `1..=10` are clamped rather than rejected.
fn clamp_level(value: Option<f64>, default: Level) -> Level {
    value
        .filter(|v| v.is_finite())
        .map(|v| Level::saturating(v.round() as i64))
        .unwrap_or(default)
}

fn names<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// First non-empty of: model answer, user input, rule default.
fn prefer(model: Vec<String>, provided: Option<Vec<String>>, fallback: Vec<String>) -> Vec<String> {
    if !model.is_empty() {
        return model;
    }
    provided.filter(|p| !p.is_empty()).unwrap_or(fallback)
}

fn merge_reply(
    input: &DesignSystemInput,
    context: IndustryContext,
    reply: StrategistReply,
) -> tokenloom_core::Result<DesignPrinciples> {
    let industry = context.industry;

    let density = match reply.density {
        Some(d) => d.parse::<Density>()?,
        None => context.density,
    };
    let philosophy = match reply.philosophy {
        Some(p) => p.parse::<Philosophy>()?,
        None => context.philosophy,
    };

    let users = prefer(
        reply.inferred_users,
        input.target_users.as_deref().map(names),
        names(&default_users(industry)),
    );
    let provided_traits = input
        .brand_traits
        .clone()
        .filter(|t| !t.is_empty())
        .map(|t| names(&resolve_trait_conflicts(industry, t).0));
    let traits = prefer(
        reply.inferred_traits,
        provided_traits,
        names(&default_traits(industry)),
    );
    let platforms = prefer(
        reply.inferred_platforms,
        input.platforms.as_deref().map(names),
        vec!["web".to_string()],
    );

    let reasoning = (reply.reasoning.is_some()
        || reply.confidence.is_some()
        || !reply.overrides.is_empty())
    .then(|| {
        let confidence = reply.confidence.unwrap_or_default();
        AgentReasoning {
            reasoning: reply
                .reasoning
                .unwrap_or_else(|| DEFAULT_REASONING.to_string()),
            confidence: ConfidenceScore::new(
                confidence.users.unwrap_or(DEFAULT_CONFIDENCE),
                confidence.traits.unwrap_or(DEFAULT_CONFIDENCE),
                confidence.platforms.unwrap_or(DEFAULT_CONFIDENCE),
            ),
            overrides: reply.overrides,
        }
    });

    Ok(DesignPrinciples {
        warmth: clamp_level(reply.warmth, context.warmth),
        density,
        clarity: clamp_level(reply.clarity, context.clarity),
        speed: clamp_level(reply.speed, context.speed),
        philosophy,
        inferred_users: users,
        inferred_traits: traits,
        inferred_platforms: platforms,
        reasoning,
        industry_context: Some(context),
    })
}

/// Turns a brief into [`DesignPrinciples`], asking the model first when one is configured.
#[derive(Clone)]
pub struct StrategistAgent {
    client: Option<Arc<dyn ModelClient>>,
    limits: RequestLimits,
}

impl StrategistAgent {
    pub fn new(client: Option<Arc<dyn ModelClient>>, limits: RequestLimits) -> Self {
        Self { client, limits }
    }

    pub fn rules_only() -> Self {
        Self::new(None, RequestLimits::default())
    }

    pub async fn derive(&self, input: &DesignSystemInput) -> DesignPrinciples {
        let span = agent_span!("design_strategist", "derive_principles");
        async move {
            if let Some(client) = &self.client {
                match self.ask_model(client.as_ref(), input).await {
                    Ok(principles) => {
                        Span::current().record("source", "model");
                        return principles;
                    }
                    Err(e) => warn!(
                        model = client.model(),
                        error = %format!("{e:#}"),
                        "model strategy failed, falling back to rules"
                    ),
                }
            }
            Span::current().record("source", "rules");
            derive_principles(input)
        }
        .instrument(span)
        .await
    }

    async fn ask_model(
        &self,
        client: &dyn ModelClient,
        input: &DesignSystemInput,
    ) -> anyhow::Result<DesignPrinciples> {
        let context = industry_context(detect_industry(&input.product_idea));
        let request = strategist_prompt(input, &context).with_limits(self.limits);
        let value = super::ask(client, request).await?;
        let reply: StrategistReply =
            serde_json::from_value(value).context("unexpected strategist answer")?;
        Ok(merge_reply(input, context, reply)?)
    }
}
