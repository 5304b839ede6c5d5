//! Item persistence port.

use async_trait::async_trait;
use common::AppResult;

use super::{Item, ItemId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Item repository implemented by the persistence layer.
///
/// Removal is a soft delete. A removed item is only ever rehydrated through
/// `ItemFactory::restore_deleted_item`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert or update an item
    async fn save(&self, item: &Item) -> AppResult<()>;

    /// Soft delete an item
    async fn remove(&self, item: &Item) -> AppResult<()>;

    /// Find an item by id, `AppError::NotFound` if missing
    async fn item_of_id(&self, id: &ItemId) -> AppResult<Item>;
}
