use std::collections::BTreeMap;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use checkpoint_domain::{Item, ItemId, ItemRepository, ItemStatus, PrimaryCategory};

#[derive(Debug)]
struct ItemLog {
    next_id: u32,
    items: BTreeMap<ItemId, Item>,
}

/// Item log kept in memory. Ids are never reused, even after removal.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    log: RwLock<ItemLog>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(ItemLog {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    async fn filtered<P>(&self, predicate: P) -> Vec<(ItemId, Item)>
    where
        P: Fn(&Item) -> bool,
    {
        self.log
            .read()
            .await
            .items
            .iter()
            .filter(|(_, item)| predicate(item))
            .map(|(id, item)| (*id, item.clone()))
            .collect()
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn add(&self, item: Item) -> anyhow::Result<ItemId> {
        let mut log = self.log.write().await;
        let id = ItemId(log.next_id);
        log.next_id = log
            .next_id
            .checked_add(1)
            .ok_or_else(|| anyhow!("item id space exhausted"))?;
        log.items.insert(id, item);
        Ok(id)
    }

    async fn remove(&self, id: ItemId) -> anyhow::Result<Option<Item>> {
        Ok(self.log.write().await.items.remove(&id))
    }

    async fn update_status(&self, id: ItemId, status: ItemStatus) -> anyhow::Result<Option<Item>> {
        let mut log = self.log.write().await;
        let Some(current) = log.items.get(&id) else {
            return Ok(None);
        };
        let updated = current.with_status(status);
        log.items.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn find_by_id(&self, id: ItemId) -> anyhow::Result<Option<Item>> {
        Ok(self.log.read().await.items.get(&id).cloned())
    }

    async fn list_with_ids(&self) -> anyhow::Result<Vec<(ItemId, Item)>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_category(
        &self,
        category: PrimaryCategory,
    ) -> anyhow::Result<Vec<(ItemId, Item)>> {
        Ok(self
            .filtered(|item| item.primary_category() == category)
            .await)
    }

    async fn find_by_status(&self, status: ItemStatus) -> anyhow::Result<Vec<(ItemId, Item)>> {
        Ok(self.filtered(|item| item.status() == status).await)
    }

    async fn find_by_brand(&self, brand: &str) -> anyhow::Result<Vec<(ItemId, Item)>> {
        let wanted = brand.trim().to_lowercase();
        Ok(self
            .filtered(|item| {
                item.brand()
                    .map(|b| b.trim().to_lowercase() == wanted)
                    .unwrap_or(false)
            })
            .await)
    }
}
