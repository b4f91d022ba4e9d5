use checkpoint_domain::ItemId;

use crate::commands::DecisionRecord;
use crate::{AppError, AppState};

/// Newest first.
pub async fn recent_decisions(
    state: &AppState,
    limit: Option<usize>,
) -> Result<Vec<DecisionRecord>, AppError> {
    let limit = limit.unwrap_or(50).clamp(1, state.config.decision_log_capacity.max(1));
    let log = state.decision_log.read().await;
    Ok(log.iter().rev().take(limit).cloned().collect())
}

pub async fn decisions_for_item(
    state: &AppState,
    item_id: ItemId,
) -> Result<Vec<DecisionRecord>, AppError> {
    let log = state.decision_log.read().await;
    Ok(log
        .iter()
        .filter(|record| record.item_id == item_id)
        .cloned()
        .collect())
}
