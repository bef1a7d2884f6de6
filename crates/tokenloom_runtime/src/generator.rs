//! End-to-end pipeline: brief → principles → tokens → validation report.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokenloom_core::{
    DesignPrinciples, DesignSystemInput, DesignTokens, ValidationReport, cross_check, quality_score,
    refine_tokens, should_refine,
};
use tokenloom_llm::{ModelClient, RequestLimits};
use tokenloom_observability::{generation_span, record_duration, record_error};
use tracing::{Instrument, Span, info};

use crate::agents::{StrategistAgent, VisualIdentityAgent};
use crate::client::build_client;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystemOutput {
    pub input: DesignSystemInput,
    pub principles: DesignPrinciples,
    pub tokens: DesignTokens,
    /// Keyed by check name.
    pub validation: ValidationReport,
    pub quality_score: f64,
    /// RFC 3339.
    pub generated_at: DateTime<Utc>,
}

pub struct DesignSystemGenerator {
    strategist: StrategistAgent,
    visual_identity: VisualIdentityAgent,
    refine_threshold: f64,
}

impl DesignSystemGenerator {
    pub fn new(client: Option<Arc<dyn ModelClient>>, limits: RequestLimits) -> Self {
        Self {
            strategist: StrategistAgent::new(client.clone(), limits),
            visual_identity: VisualIdentityAgent::new(client, limits),
            refine_threshold: tokenloom_core::collaboration::DEFAULT_REFINE_THRESHOLD,
        }
    }

    /// Rules only; never touches the network.
    pub fn rules_only() -> Self {
        Self::new(None, RequestLimits::default())
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self::new(client, config.limits).with_refine_threshold(config.refine_threshold))
    }

    pub fn with_refine_threshold(mut self, threshold: f64) -> Self {
        self.refine_threshold = threshold;
        self
    }

    pub async fn generate(&self, input: DesignSystemInput) -> Result<DesignSystemOutput> {
        let span = generation_span!(input.product_idea.as_str());
        async move {
            if input.product_idea.trim().is_empty() {
                let err = RuntimeError::InvalidInput("product idea is empty".to_string());
                record_error(&err);
                return Err(err);
            }
            let start = Instant::now();

            let principles = self.strategist.derive(&input).await;
            Span::current().record("industry", principles.industry().as_str());

            let mut tokens = self
                .visual_identity
                .generate(&principles, &input.product_idea)
                .await;

            let mut validation = cross_check(&principles, &tokens);
            let mut score = quality_score(&validation);

            if should_refine(&validation, self.refine_threshold) {
                match validation
                    .values()
                    .filter(|r| !r.valid)
                    .find_map(|r| refine_tokens(&tokens, r))
                {
                    Some(refined) => {
                        tokens = refined;
                        validation = cross_check(&principles, &tokens);
                        score = quality_score(&validation);
                    }
                    None => info!(
                        quality_score = score,
                        threshold = self.refine_threshold,
                        "quality below threshold, no refinement available"
                    ),
                }
            }

            Span::current().record("quality_score", score);
            record_duration("duration_ms", start.elapsed());
            info!(
                colors = tokens.colors.len(),
                typography = tokens.typography.len(),
                spacing = tokens.spacing.len(),
                quality_score = score,
                "design system generated"
            );

            Ok(DesignSystemOutput {
                input,
                principles,
                tokens,
                validation,
                quality_score: score,
                generated_at: Utc::now(),
            })
        }
        .instrument(span)
        .await
    }
}
