//! Persistence port for maps.

use async_trait::async_trait;
use common::AppResult;

use super::{Map, MapId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Map repository implemented by the persistence layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MapRepository: Send + Sync {
    /// Insert or update a map
    async fn save(&self, map: &Map) -> AppResult<()>;

    /// Soft delete a map
    async fn remove(&self, map: &Map) -> AppResult<()>;

    /// Find a map by id, `AppError::NotFound` if missing
    async fn map_of_id(&self, id: &MapId) -> AppResult<Map>;
}
