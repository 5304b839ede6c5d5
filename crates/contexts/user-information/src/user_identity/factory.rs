//! UserIdentity construction and rehydration.

use std::sync::Arc;

use kernel::{DomainResult, Field, Lifecycle};
use serde::Deserialize;

use super::{DomainResolver, Email, PublicUserId, SystemUserId, UserIdentity, UserName};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserIdentity {
    pub public_id: String,
    pub name: Option<String>,
    pub email: String,
}

/// Persisted state of an active identity. A missing name restores as a
/// tombstone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreUserIdentity {
    pub id: String,
    pub public_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDeletedUserIdentity {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

/// Builds `UserIdentity` aggregates. Email checks go through the injected
/// resolver and may block.
#[derive(Clone)]
pub struct UserIdentityFactory {
    resolver: Arc<dyn DomainResolver>,
}

impl UserIdentityFactory {
    pub fn new(resolver: Arc<dyn DomainResolver>) -> Self {
        Self { resolver }
    }

    pub fn new_user_identity(&self, input: NewUserIdentity) -> DomainResult<UserIdentity> {
        Ok(UserIdentity::active(
            SystemUserId::generate(),
            PublicUserId::new(input.public_id)?,
            optional_name(input.name)?,
            Email::new(input.email, self.resolver.as_ref())?,
            Lifecycle::start(),
        ))
    }

    pub fn restore_user_identity(&self, input: RestoreUserIdentity) -> DomainResult<UserIdentity> {
        Ok(UserIdentity::active(
            SystemUserId::parse(&input.id)?,
            PublicUserId::new(input.public_id)?,
            optional_name(input.name)?,
            Email::new(input.email, self.resolver.as_ref())?,
            Lifecycle::restore_from_strings(
                &input.created_at,
                &input.updated_at,
                &input.deleted_at,
                false,
            )?,
        ))
    }

    pub fn restore_deleted_user_identity(
        &self,
        input: RestoreDeletedUserIdentity,
    ) -> DomainResult<UserIdentity> {
        Ok(UserIdentity::tombstone(
            SystemUserId::parse(&input.id)?,
            Lifecycle::restore_from_strings(
                &input.created_at,
                &input.updated_at,
                &input.deleted_at,
                true,
            )?,
        ))
    }
}

fn optional_name(name: Option<String>) -> DomainResult<Field<UserName>> {
    match name {
        Some(name) => UserName::new(name).map(Field::Present),
        None => Ok(Field::Tombstone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_identity::{MockDomainResolver, Operator};
    use kernel::{DomainError, Entity, RangeViolation};
    use serde_json::json;

    const ID: &str = "0123456789abcdef0123456789abcdef";

    fn factory() -> UserIdentityFactory {
        let mut resolver = MockDomainResolver::new();
        resolver.expect_has_record().returning(|_, _| Ok(true));
        UserIdentityFactory::new(Arc::new(resolver))
    }

    fn restore_input() -> RestoreUserIdentity {
        serde_json::from_value(json!({
            "id": ID,
            "publicId": "taro_01",
            "name": "Taro",
            "email": "taro@example.com",
            "createdAt": "2024-01-01 00:00:00",
            "updatedAt": "2024-01-01 00:00:00",
            "deletedAt": "2024-01-01 00:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_new_user_identity() {
        let identity = factory()
            .new_user_identity(NewUserIdentity {
                public_id: "taro_01".to_string(),
                name: Some("Taro".to_string()),
                email: "taro@example.com".to_string(),
            })
            .unwrap();

        assert!(!identity.is_deleted());
        assert_eq!(identity.name().as_present().unwrap().as_str(), "Taro");
    }

    #[test]
    fn test_restore_user_identity() {
        let identity = factory().restore_user_identity(restore_input()).unwrap();

        assert_eq!(identity.id().as_str(), ID);
        assert_eq!(identity.public_id().as_present().unwrap().as_str(), "taro_01");
        assert_eq!(identity.email().as_present().unwrap().as_str(), "taro@example.com");
    }

    #[test]
    fn test_missing_name_restores_as_tombstone() {
        let mut input = restore_input();
        input.name = None;
        let identity = factory().restore_user_identity(input).unwrap();

        assert!(identity.name().is_tombstone());
        assert!(!identity.is_deleted());
    }

    #[test]
    fn test_restore_runs_validators() {
        let mut input = restore_input();
        input.public_id = "x".to_string();
        assert_eq!(
            factory().restore_user_identity(input).unwrap_err().range_violation(),
            Some(RangeViolation::TooShort { min: 3 })
        );

        let mut resolver = MockDomainResolver::new();
        resolver.expect_has_record().returning(|_, _| Ok(false));
        let err = UserIdentityFactory::new(Arc::new(resolver))
            .restore_user_identity(restore_input())
            .unwrap_err();
        assert!(matches!(err, DomainError::Format { field: "email", .. }));
    }

    #[test]
    fn test_restore_deleted_user_identity_never_resolves() {
        let mut resolver = MockDomainResolver::new();
        resolver.expect_has_record().never();

        let mut identity = UserIdentityFactory::new(Arc::new(resolver))
            .restore_deleted_user_identity(RestoreDeletedUserIdentity {
                id: ID.to_string(),
                created_at: "2024-01-01 00:00:00".to_string(),
                updated_at: "2024-01-01 00:00:00".to_string(),
                deleted_at: "2024-06-01 00:00:00".to_string(),
            })
            .unwrap();

        assert!(identity.is_deleted());
        assert!(identity.public_id().is_tombstone());
        assert!(identity.name().is_tombstone());
        assert!(identity.email().is_tombstone());

        let owner = Operator::parse(ID).unwrap();
        assert_eq!(
            identity.edit_name(UserName::new("Back").unwrap(), &owner),
            Err(DomainError::AlreadyDeleted("user identity"))
        );
    }

    #[test]
    fn test_only_the_user_may_edit() {
        let mut identity = factory().restore_user_identity(restore_input()).unwrap();
        let other = Operator::new(SystemUserId::generate());

        assert_eq!(
            identity.edit_public_id(PublicUserId::new("hijack").unwrap(), &other),
            Err(DomainError::Authorization)
        );
        assert_eq!(identity.public_id().as_present().unwrap().as_str(), "taro_01");

        let before = identity.lifecycle().updated_at();
        identity
            .edit_public_id(PublicUserId::new("taro_02").unwrap(), &Operator::parse(ID).unwrap())
            .unwrap();
        assert!(identity.lifecycle().updated_at() > before);
    }
}
