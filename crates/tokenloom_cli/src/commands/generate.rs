//! `tokenloom generate`

use anyhow::{Context, Result};
use comfy_table::Cell;
use tokenloom_core::color::WHITE;
use tokenloom_core::{DesignSystemInput, contrast_ratio};
use tokenloom_runtime::{DesignSystemGenerator, DesignSystemOutput, LlmProvider, RuntimeConfig};

use crate::cli::GenerateArgs;
use crate::output;

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn config(args: &GenerateArgs) -> Result<RuntimeConfig> {
    let mut config = RuntimeConfig::from_env();
    if args.rules {
        config = config.with_provider(LlmProvider::None);
    } else if let Some(p) = args.provider.as_deref() {
        config = config.with_provider(p.parse::<LlmProvider>()?);
    }
    if let Some(m) = &args.model {
        config = config.with_model(m.clone());
    }
    Ok(config)
}

pub async fn handle(args: GenerateArgs) -> Result<()> {
    let config = config(&args)?;
    let generator = DesignSystemGenerator::from_config(&config)?;

    let input = DesignSystemInput {
        product_idea: args.idea,
        target_users: non_empty(args.users),
        brand_traits: non_empty(args.traits),
        platforms: non_empty(args.platforms),
    };

    let message = match config.provider {
        LlmProvider::None => "Generating design system (rules)".to_string(),
        provider => format!("Generating design system ({provider}/{})", config.model),
    };
    let spinner = output::spinner(&message);
    let result = match generator.generate(input).await {
        Ok(result) => result,
        Err(e) => {
            output::spinner_error(&spinner, "Generation failed");
            return Err(e.into());
        }
    };
    output::spinner_success(&spinner, "Design system generated");

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        output::success(&format!("Wrote {}", path.display()));
    }

    output::data("design_system", &result);
    render(&result);
    Ok(())
}

fn render(result: &DesignSystemOutput) {
    let p = &result.principles;
    output::header(&format!("Principles ({})", p.industry()));
    output::kv("Philosophy", p.philosophy.as_str());
    output::kv("Density", p.density.as_str());
    output::kv("Warmth", &format!("{}/10", p.warmth));
    output::kv("Clarity", &format!("{}/10", p.clarity));
    output::kv("Speed", &format!("{}/10", p.speed));
    if let Some(reasoning) = &p.reasoning {
        output::dim(&format!("  {}", reasoning.reasoning));
    }

    let tokens = &result.tokens;
    output::header(&format!("Colors ({})", tokens.colors.len()));
    let mut table = output::table(&["Token", "Hex", "", "Role", "On white"]);
    for token in &tokens.colors {
        table.add_row(vec![
            Cell::new(&token.name),
            Cell::new(token.value.to_hex()),
            Cell::new(output::swatch(token.value)),
            Cell::new(token.role.as_str()),
            Cell::new(format!("{:.2}", contrast_ratio(token.value, WHITE))),
        ]);
    }
    output::table_print(&table);
    if let Some(rationale) = &tokens.color_rationale {
        output::dim(&format!("  {}", rationale.overall));
    }
    for rec in &tokens.recommendations {
        output::kv(
            "Alternative",
            &format!(
                "{}{} / {}{}  {}",
                output::swatch(rec.primary),
                rec.primary,
                output::swatch(rec.secondary),
                rec.secondary,
                rec.rationale
            ),
        );
    }

    output::header("Tokens");
    output::kv("Typography", &tokens.typography.len().to_string());
    output::kv("Spacing", &tokens.spacing.len().to_string());
    output::kv(
        "Dark colors",
        &tokens.dark_colors.as_ref().map_or(0, Vec::len).to_string(),
    );

    output::header("Validation");
    for (name, check) in &result.validation {
        output::kv(name, &format!("{} ({:.2})", output::verdict(check.valid), check.score));
        for issue in &check.issues {
            output::warning(issue);
        }
    }
    output::kv("Quality", &format!("{:.0}%", result.quality_score * 100.0));
}
