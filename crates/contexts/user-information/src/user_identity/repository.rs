//! Persistence port for user identities.

use async_trait::async_trait;
use common::AppResult;

use super::{SystemUserId, UserIdentity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// UserIdentity repository implemented by the persistence layer.
///
/// Identities are created and removed by account management outside this
/// context, so only updates and lookups are exposed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserIdentityRepository: Send + Sync {
    /// Persist an edited identity
    async fn save(&self, identity: &UserIdentity) -> AppResult<()>;

    /// Find an identity by id, `AppError::NotFound` if missing
    async fn user_identity_of_id(&self, id: &SystemUserId) -> AppResult<UserIdentity>;
}
