//! UserIdentity use cases.

use std::sync::Arc;

use common::{run_in_transaction, AppError, AppResult, UnitOfWork};
use kernel::{DomainError, Entity};
use serde::Deserialize;
use tracing::{info, warn};

use crate::dto::UserIdentityDto;
use crate::user_identity::{
    DomainResolver, Email, Operator, PublicUserId, SystemUserId, UserIdentity,
    UserIdentityRepository, UserName,
};

/// Replacement values for every editable identity field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserIdentity {
    pub public_id: String,
    pub name: String,
    pub email: String,
}

pub struct UserIdentityApplicationService {
    identities: Arc<dyn UserIdentityRepository>,
    resolver: Arc<dyn DomainResolver>,
    uow: Arc<dyn UnitOfWork>,
}

impl UserIdentityApplicationService {
    pub fn new(
        identities: Arc<dyn UserIdentityRepository>,
        resolver: Arc<dyn DomainResolver>,
        uow: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            identities,
            resolver,
            uow,
        }
    }

    /// Replace public id, name and email, then persist
    pub async fn edit_all(
        &self,
        id: &str,
        edit: EditUserIdentity,
        operator_id: &str,
    ) -> AppResult<()> {
        let mut identity = self.user_identity_of_id(id).await?;
        let operator = Operator::parse(operator_id)?;

        if let Err(e) = self.apply_edit(&mut identity, edit, &operator).await {
            if matches!(e.as_domain(), Some(DomainError::Authorization)) {
                warn!(user_id = %identity.id(), operator_id, "User identity edit refused");
            }
            return Err(e);
        }

        run_in_transaction(self.uow.as_ref(), self.identities.save(&identity)).await?;

        info!(user_id = %identity.id(), "User identity edited");
        Ok(())
    }

    pub async fn user_identity_dto(&self, id: &str) -> AppResult<UserIdentityDto> {
        let identity = self.user_identity_of_id(id).await?;
        Ok(UserIdentityDto::from(&identity))
    }

    async fn apply_edit(
        &self,
        identity: &mut UserIdentity,
        edit: EditUserIdentity,
        operator: &Operator,
    ) -> AppResult<()> {
        identity.edit_public_id(PublicUserId::new(edit.public_id)?, operator)?;
        identity.edit_name(UserName::new(edit.name)?, operator)?;

        let email = self.checked_email(edit.email).await?;
        identity.edit_email(email, operator)?;
        Ok(())
    }

    /// Email validation performs blocking DNS lookups
    async fn checked_email(&self, address: String) -> AppResult<Email> {
        let resolver = Arc::clone(&self.resolver);
        let email = tokio::task::spawn_blocking(move || Email::new(address, resolver.as_ref()))
            .await
            .map_err(|e| AppError::internal(format!("email check aborted: {}", e)))??;
        Ok(email)
    }

    async fn user_identity_of_id(&self, id: &str) -> AppResult<UserIdentity> {
        let id = SystemUserId::parse(id)?;
        self.identities.user_identity_of_id(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_identity::{
        MockDomainResolver, MockUserIdentityRepository, RestoreDeletedUserIdentity,
        RestoreUserIdentity, UserIdentityFactory,
    };
    use common::MockUnitOfWork;

    const ID: &str = "0123456789abcdef0123456789abcdef";
    const OTHER: &str = "fedcba9876543210fedcba9876543210";

    fn resolving(answer: bool) -> MockDomainResolver {
        let mut resolver = MockDomainResolver::new();
        resolver.expect_has_record().returning(move |_, _| Ok(answer));
        resolver
    }

    fn stored_identity() -> UserIdentity {
        UserIdentityFactory::new(Arc::new(resolving(true)))
            .restore_user_identity(RestoreUserIdentity {
                id: ID.to_string(),
                public_id: "taro_01".to_string(),
                name: Some("Taro".to_string()),
                email: "taro@example.com".to_string(),
                created_at: "2024-01-01 00:00:00".to_string(),
                updated_at: "2024-01-01 00:00:00".to_string(),
                deleted_at: "2024-01-01 00:00:00".to_string(),
            })
            .unwrap()
    }

    fn edit() -> EditUserIdentity {
        EditUserIdentity {
            public_id: "taro_02".to_string(),
            name: "Taro Y".to_string(),
            email: "taro@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn test_edit_all_saves_in_transaction() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id()
            .returning(|_| Ok(stored_identity()));
        repo.expect_save()
            .times(1)
            .withf(|identity| {
                identity.email().as_present().map(Email::as_str) == Some("taro@example.org")
                    && identity.public_id().as_present().map(PublicUserId::as_str)
                        == Some("taro_02")
            })
            .returning(|_| Ok(()));
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().times(1).returning(|| Ok(()));
        uow.expect_commit().times(1).returning(|| Ok(()));

        let service =
            UserIdentityApplicationService::new(Arc::new(repo), Arc::new(resolving(true)), Arc::new(uow));

        assert!(service.edit_all(ID, edit(), ID).await.is_ok());
    }

    #[tokio::test]
    async fn test_edit_all_by_other_user_is_refused() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id()
            .returning(|_| Ok(stored_identity()));
        repo.expect_save().never();
        let mut resolver = MockDomainResolver::new();
        resolver.expect_has_record().never();

        let service = UserIdentityApplicationService::new(
            Arc::new(repo),
            Arc::new(resolver),
            Arc::new(MockUnitOfWork::new()),
        );

        let err = service.edit_all(ID, edit(), OTHER).await.unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_unresolvable_email_is_a_format_error() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id()
            .returning(|_| Ok(stored_identity()));
        repo.expect_save().never();

        let service = UserIdentityApplicationService::new(
            Arc::new(repo),
            Arc::new(resolving(false)),
            Arc::new(MockUnitOfWork::new()),
        );

        let err = service.edit_all(ID, edit(), ID).await.unwrap_err();
        assert_eq!(err.code(), "FORMAT_ERROR");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_deleted_identity_cannot_be_edited() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id().returning(|_| {
            UserIdentityFactory::new(Arc::new(MockDomainResolver::new()))
                .restore_deleted_user_identity(RestoreDeletedUserIdentity {
                    id: ID.to_string(),
                    created_at: "2024-01-01 00:00:00".to_string(),
                    updated_at: "2024-01-01 00:00:00".to_string(),
                    deleted_at: "2024-01-01 00:00:00".to_string(),
                })
                .map_err(AppError::from)
        });

        let service = UserIdentityApplicationService::new(
            Arc::new(repo),
            Arc::new(resolving(true)),
            Arc::new(MockUnitOfWork::new()),
        );

        let err = service.edit_all(ID, edit(), ID).await.unwrap_err();
        assert_eq!(err.as_domain(), Some(&DomainError::AlreadyDeleted("user identity")));
    }

    #[tokio::test]
    async fn test_user_identity_dto() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id()
            .returning(|_| Ok(stored_identity()));

        let service = UserIdentityApplicationService::new(
            Arc::new(repo),
            Arc::new(resolving(true)),
            Arc::new(MockUnitOfWork::new()),
        );

        let dto = service.user_identity_dto(ID).await.unwrap();
        assert_eq!(dto.public_id, "taro_01");
        assert_eq!(dto.name, "Taro");
    }

    #[tokio::test]
    async fn test_missing_identity() {
        let mut repo = MockUserIdentityRepository::new();
        repo.expect_user_identity_of_id()
            .returning(|_| Err(AppError::NotFound));

        let service = UserIdentityApplicationService::new(
            Arc::new(repo),
            Arc::new(resolving(true)),
            Arc::new(MockUnitOfWork::new()),
        );

        assert!(matches!(
            service.user_identity_dto(ID).await,
            Err(AppError::NotFound)
        ));
    }
}
