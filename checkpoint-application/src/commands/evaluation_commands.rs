use chrono::{DateTime, Utc};
use checkpoint_domain::{Decision, DecisionResult, ItemId, ItemStatus, ThreatLevel};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{AppError, AppState};

/// Audit entry kept in the bounded decision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRecord {
    pub id: Uuid,
    pub item_id: ItemId,
    pub item_name: String,
    pub decision: Decision,
    pub threat_level: ThreatLevel,
    pub risk_score: Option<i32>,
    pub alert: bool,
    pub evaluated_at: DateTime<Utc>,
}

impl DecisionRecord {
    fn from_result(item_id: ItemId, result: &DecisionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            item_name: result.item().name().to_string(),
            decision: result.decision(),
            threat_level: result.threat_level(),
            risk_score: result.risk_score(),
            alert: result.requires_immediate_alert(),
            evaluated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub item_id: ItemId,
    pub result: DecisionResult,
    /// True when the item was released as part of this evaluation.
    pub released: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewFailure {
    pub item_id: ItemId,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewReport {
    pub evaluations: Vec<Evaluation>,
    pub failures: Vec<ReviewFailure>,
}

impl ReviewReport {
    pub fn alerts(&self) -> impl Iterator<Item = &Evaluation> {
        self.evaluations
            .iter()
            .filter(|evaluation| evaluation.result.requires_immediate_alert())
    }
}

pub async fn evaluate_item(state: &AppState, id: ItemId) -> Result<Evaluation, AppError> {
    match run_evaluation(state, id).await {
        Ok(evaluation) => Ok(evaluation),
        Err(AppError::NotFound(what)) => Err(AppError::NotFound(what)),
        Err(err) => {
            state.metrics.record_failure();
            error!(item_id = %id, error = %err, "evaluation failed");
            Err(err)
        }
    }
}

async fn run_evaluation(state: &AppState, id: ItemId) -> Result<Evaluation, AppError> {
    let item = state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {}", id)))?;

    let result = state.engine.evaluate(&item)?;

    // A failed status write must leave metrics and the decision log untouched.
    let mut released = false;
    if state.config.auto_release_allowed
        && result.decision().is_allowed()
        && item.status() == ItemStatus::Held
    {
        state
            .item_repo
            .update_status(id, ItemStatus::Released)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item {}", id)))?;
        state.metrics.record_release();
        released = true;
    }

    state.metrics.record_decision(&result);
    append_record(state, DecisionRecord::from_result(id, &result)).await;

    if result.requires_immediate_alert() {
        warn!(
            item_id = %id,
            item = item.name(),
            threat = %result.threat_level(),
            label = result.threat_level().status_label(),
            reason = result.reason(),
            "immediate alert raised"
        );
    }
    info!(
        item_id = %id,
        decision = %result.decision(),
        threat = %result.threat_level(),
        score = ?result.risk_score(),
        released,
        "evaluation recorded"
    );

    Ok(Evaluation {
        item_id: id,
        result,
        released,
    })
}

async fn append_record(state: &AppState, record: DecisionRecord) {
    let capacity = state.config.decision_log_capacity.max(1);
    let mut log = state.decision_log.write().await;
    log.push_back(record);
    while log.len() > capacity {
        log.pop_front();
    }
}

/// Evaluates every HELD item in id order. One failing item is logged and
/// reported without stopping the batch.
pub async fn review_queue(state: &AppState) -> Result<ReviewReport, AppError> {
    let queue = state.item_repo.find_by_status(ItemStatus::Held).await?;
    info!(queued = queue.len(), "reviewing evaluation queue");

    let mut report = ReviewReport::default();
    for (id, _) in queue {
        match evaluate_item(state, id).await {
            Ok(evaluation) => report.evaluations.push(evaluation),
            Err(err) => {
                warn!(item_id = %id, error = %err, "skipping item after failed evaluation");
                report.failures.push(ReviewFailure {
                    item_id: id,
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        evaluated = report.evaluations.len(),
        failed = report.failures.len(),
        "review finished"
    );
    Ok(report)
}
