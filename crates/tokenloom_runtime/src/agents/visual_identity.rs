use std::sync::Arc;

use anyhow::Context;
use tokenloom_core::knowledge::{accessibility_requirements, industry_colors};
use tokenloom_core::{ColorSeeds, DesignPrinciples, DesignTokens, VisualIdentity};
use tokenloom_llm::{ModelClient, RequestLimits};
use tokenloom_observability::agent_span;
use tracing::{Instrument, Span, debug, warn};

use crate::prompt::color_prompt;

/// Builds the token set; palette seeds come from the model when one is configured.
#[derive(Clone)]
pub struct VisualIdentityAgent {
    client: Option<Arc<dyn ModelClient>>,
    limits: RequestLimits,
}

impl VisualIdentityAgent {
    pub fn new(client: Option<Arc<dyn ModelClient>>, limits: RequestLimits) -> Self {
        Self { client, limits }
    }

    pub fn rules_only() -> Self {
        Self::new(None, RequestLimits::default())
    }

    pub async fn generate(&self, principles: &DesignPrinciples, description: &str) -> DesignTokens {
        let span = agent_span!("visual_identity", "generate_tokens");
        async move {
            let seeds = match &self.client {
                Some(client) => match self.ask_model(client.as_ref(), principles).await {
                    Ok(seeds) => Some(seeds),
                    Err(e) => {
                        warn!(
                            model = client.model(),
                            error = %format!("{e:#}"),
                            "model palette failed, falling back to rules"
                        );
                        None
                    }
                },
                None => None,
            };
            Span::current().record("source", if seeds.is_some() { "model" } else { "rules" });
            VisualIdentity::new(principles, description).generate(seeds.as_ref())
        }
        .instrument(span)
        .await
    }

    async fn ask_model(
        &self,
        client: &dyn ModelClient,
        principles: &DesignPrinciples,
    ) -> anyhow::Result<ColorSeeds> {
        let industry = principles.industry();
        let suggestion = industry_colors(industry);
        let request = color_prompt(
            principles,
            suggestion.as_ref(),
            accessibility_requirements(industry),
        )
        .with_limits(self.limits);

        let value = super::ask(client, request).await?;
        // Hex strings are parsed by `Rgb`; one bad color rejects the whole answer.
        let seeds: ColorSeeds =
            serde_json::from_value(value).context("model palette is not usable")?;
        debug!(primary = %seeds.primary, neutral = %seeds.neutral, "model palette accepted");
        Ok(seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenloom_core::{Density, Philosophy};

    #[tokio::test]
    async fn test_rules_only_matches_visual_identity() {
        let p = DesignPrinciples::new(5, Density::Balanced, 8, 7, Philosophy::ComponentFirst).unwrap();
        let tokens = VisualIdentityAgent::rules_only().generate(&p, "Recipe box").await;
        assert_eq!(tokens, VisualIdentity::new(&p, "Recipe box").generate(None));
    }
}
