use checkpoint_domain::{IntakeItem, Item, ItemId, ItemStatus};
use tracing::{debug, info};

use crate::{AppError, AppState};

/// Stores a new HELD item and links it to its holder when one is named.
pub async fn register_item(state: &AppState, payload: IntakeItem) -> Result<ItemId, AppError> {
    let item = payload.into_item()?;

    if let Some(holder) = item.holder() {
        if state.student_repo.find(holder).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "unknown holder '{}' for item '{}'",
                holder,
                item.name()
            )));
        }
    }

    let holder = item.holder().cloned();
    let name = item.name().to_string();
    let id = state.item_repo.add(item).await?;
    if let Some(holder) = holder {
        if state.student_repo.link_item(&holder, id).await?.is_none() {
            // Holder vanished after the lookup; drop the orphaned item.
            state.item_repo.remove(id).await?;
            return Err(AppError::NotFound(format!("student {}", holder)));
        }
        debug!(item_id = %id, student = %holder, "linked item to holder");
    }
    info!(item_id = %id, item = %name, "item registered");
    Ok(id)
}

pub async fn release_item(state: &AppState, id: ItemId) -> Result<Item, AppError> {
    let item = state
        .item_repo
        .update_status(id, ItemStatus::Released)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {}", id)))?;
    state.metrics.record_release();
    info!(item_id = %id, item = item.name(), "item released");
    Ok(item)
}

/// Deletes the item and drops it from its holder's record.
pub async fn remove_item(state: &AppState, id: ItemId) -> Result<Item, AppError> {
    let item = state
        .item_repo
        .remove(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {}", id)))?;
    if let Some(holder) = item.holder() {
        state.student_repo.unlink_item(holder, id).await?;
    }
    info!(item_id = %id, item = item.name(), "item removed");
    Ok(item)
}
