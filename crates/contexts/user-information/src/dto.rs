//! Flattened, display-ready view of a user identity.

use common::{AppError, AppResult};
use kernel::{display_timestamp, Entity};
use serde::Serialize;

use crate::user_identity::UserIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentityDto {
    pub id: String,
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
    pub is_deleted: bool,
}

impl UserIdentityDto {
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::internal(e.to_string()))
    }
}

impl From<&UserIdentity> for UserIdentityDto {
    fn from(identity: &UserIdentity) -> Self {
        let lifecycle = identity.lifecycle();
        Self {
            id: identity.id().to_string(),
            public_id: identity
                .public_id()
                .map_or(String::new(), |id| id.as_str().to_string()),
            name: identity
                .name()
                .map_or(String::new(), |name| name.as_str().to_string()),
            email: identity
                .email()
                .map_or(String::new(), |email| email.as_str().to_string()),
            created_at: display_timestamp(lifecycle.created_at()),
            updated_at: display_timestamp(lifecycle.updated_at()),
            deleted_at: display_timestamp(lifecycle.deleted_at()),
            is_deleted: lifecycle.is_deleted(),
        }
    }
}
