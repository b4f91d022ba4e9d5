use anyhow::Result;
use tracing::{info, warn};

use checkpoint_application::commands::review_queue;
use checkpoint_application::queries::students_with_violations;
use checkpoint_domain::{DecisionEngine, IntakeSource};
use checkpoint_infrastructure::{AppConfig, IntakeFileRepository};

use crate::context::AppContext;
use crate::render::{
    render_evaluation_json, render_evaluation_text, render_review_json, render_review_text,
    EvaluatedEntry, RejectedEntry, ReviewOutput,
};

/// Runs every item of an intake file straight through the decision engine.
/// Nothing is stored; items that fail validation are listed as rejected.
pub async fn run_evaluate(path: &str, json: bool) -> Result<String> {
    let manifest = IntakeFileRepository::new().load_intake(path).await?;
    let engine = DecisionEngine::new();

    let mut evaluated = Vec::new();
    let mut rejected = Vec::new();
    for (index, intake) in manifest.items.into_iter().enumerate() {
        let position = index + 1;
        let name = intake.name.clone();
        let outcome = intake
            .into_item()
            .and_then(|item| engine.evaluate(&item));
        match outcome {
            Ok(result) => evaluated.push(EvaluatedEntry::new(position, result)),
            Err(err) => {
                warn!(position, item = %name, error = %err, "item could not be evaluated");
                rejected.push(RejectedEntry {
                    position,
                    name,
                    error: err.to_string(),
                });
            }
        }
    }
    info!(
        evaluated = evaluated.len(),
        rejected = rejected.len(),
        "intake file evaluated"
    );

    if json {
        render_evaluation_json(&evaluated, &rejected)
    } else {
        Ok(render_evaluation_text(&evaluated, &rejected))
    }
}

/// Seeds the repositories from the configured intake file and reviews the
/// evaluation queue.
pub async fn run_review(config: &AppConfig, json: bool, with_metrics: bool) -> Result<String> {
    let (context, seed) = AppContext::load(config.to_runtime_config()).await?;
    let state = &context.state;

    let report = review_queue(state).await?;
    let violators = students_with_violations(state).await?;

    let output = ReviewOutput {
        seed_rejections: seed.rejected,
        report,
        students_with_violations: violators,
        metrics: with_metrics.then(|| state.metrics.snapshot()),
    };

    if json {
        render_review_json(&output)
    } else {
        let mut text = render_review_text(&output);
        if with_metrics {
            text.push('\n');
            text.push_str(&state.metrics.render_prometheus());
        }
        Ok(text)
    }
}
