use checkpoint_domain::{Item, ItemId, ItemStatus, PrimaryCategory};

use crate::{AppError, AppState};

pub async fn get_item(state: &AppState, id: ItemId) -> Result<Item, AppError> {
    state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {}", id)))
}

pub async fn list_items(state: &AppState) -> Result<Vec<(ItemId, Item)>, AppError> {
    Ok(state.item_repo.list_with_ids().await?)
}

/// Items still HELD at the gate, oldest id first.
pub async fn evaluation_queue(state: &AppState) -> Result<Vec<(ItemId, Item)>, AppError> {
    items_by_status(state, ItemStatus::Held).await
}

/// Number of items that have left the queue.
pub async fn processed_count(state: &AppState) -> Result<usize, AppError> {
    Ok(items_by_status(state, ItemStatus::Released).await?.len())
}

pub async fn items_by_status(
    state: &AppState,
    status: ItemStatus,
) -> Result<Vec<(ItemId, Item)>, AppError> {
    Ok(state.item_repo.find_by_status(status).await?)
}

pub async fn items_by_category(
    state: &AppState,
    category: PrimaryCategory,
) -> Result<Vec<(ItemId, Item)>, AppError> {
    Ok(state.item_repo.find_by_category(category).await?)
}

pub async fn items_by_brand(
    state: &AppState,
    brand: &str,
) -> Result<Vec<(ItemId, Item)>, AppError> {
    let brand = brand.trim();
    if brand.is_empty() {
        return Err(AppError::BadRequest("brand is required".to_string()));
    }
    Ok(state.item_repo.find_by_brand(brand).await?)
}
