use async_trait::async_trait;

use crate::entities::{IntakeManifest, Item, Student};
use crate::value_objects::{ItemId, ItemStatus, PrimaryCategory, StudentId, StudentStatus};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores the item under the next sequential id, starting at 1.
    async fn add(&self, item: Item) -> anyhow::Result<ItemId>;
    async fn remove(&self, id: ItemId) -> anyhow::Result<Option<Item>>;
    /// Returns the updated item, or `None` when the id is unknown.
    async fn update_status(&self, id: ItemId, status: ItemStatus) -> anyhow::Result<Option<Item>>;
    async fn find_by_id(&self, id: ItemId) -> anyhow::Result<Option<Item>>;
    /// All items in ascending id order.
    async fn list_with_ids(&self) -> anyhow::Result<Vec<(ItemId, Item)>>;
    async fn find_by_category(
        &self,
        category: PrimaryCategory,
    ) -> anyhow::Result<Vec<(ItemId, Item)>>;
    async fn find_by_status(&self, status: ItemStatus) -> anyhow::Result<Vec<(ItemId, Item)>>;
    /// Case-insensitive brand match.
    async fn find_by_brand(&self, brand: &str) -> anyhow::Result<Vec<(ItemId, Item)>>;
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fails when a student with the same id already exists.
    async fn add(&self, student: Student) -> anyhow::Result<()>;
    /// Replaces the stored student with the same id. Returns false when absent.
    async fn update(&self, student: Student) -> anyhow::Result<bool>;
    async fn find(&self, id: &StudentId) -> anyhow::Result<Option<Student>>;
    async fn list(&self) -> anyhow::Result<Vec<Student>>;
    async fn find_by_status(&self, status: StudentStatus) -> anyhow::Result<Vec<Student>>;
    async fn find_by_course(&self, course: &str) -> anyhow::Result<Vec<Student>>;
    async fn find_with_violations(&self) -> anyhow::Result<Vec<Student>>;
    async fn link_item(&self, id: &StudentId, item_id: ItemId) -> anyhow::Result<Option<Student>>;
    async fn unlink_item(&self, id: &StudentId, item_id: ItemId)
        -> anyhow::Result<Option<Student>>;
    async fn remove(&self, id: &StudentId) -> anyhow::Result<Option<Student>>;
}

#[async_trait]
pub trait IntakeSource: Send + Sync {
    async fn load_intake(&self, path: &str) -> anyhow::Result<IntakeManifest>;
}
