//! UserIdentity aggregate.

use kernel::{DomainResult, Entity, Field, Lifecycle};

use super::{Email, Operator, PublicUserId, SystemUserId, UserName};

const AGGREGATE: &str = "user identity";

/// Account-level identity of a user.
///
/// Only the user themselves may edit it: the operator's id must equal the
/// identity's id.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    id: SystemUserId,
    public_id: Field<PublicUserId>,
    name: Field<UserName>,
    email: Field<Email>,
    lifecycle: Lifecycle,
}

impl UserIdentity {
    pub(crate) fn active(
        id: SystemUserId,
        public_id: PublicUserId,
        name: Field<UserName>,
        email: Email,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            id,
            public_id: Field::Present(public_id),
            name,
            email: Field::Present(email),
            lifecycle,
        }
    }

    /// Soft-deleted aggregate. The lifecycle is always marked deleted.
    pub(crate) fn tombstone(id: SystemUserId, lifecycle: Lifecycle) -> Self {
        Self {
            id,
            public_id: Field::Tombstone,
            name: Field::Tombstone,
            email: Field::Tombstone,
            lifecycle: lifecycle.into_deleted(),
        }
    }

    pub fn public_id(&self) -> &Field<PublicUserId> {
        &self.public_id
    }

    /// Display name, a tombstone when never set
    pub fn name(&self) -> &Field<UserName> {
        &self.name
    }

    pub fn email(&self) -> &Field<Email> {
        &self.email
    }

    pub fn edit_public_id(&mut self, public_id: PublicUserId, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.public_id = Field::Present(public_id);
        self.lifecycle.touch();
        Ok(())
    }

    pub fn edit_name(&mut self, name: UserName, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.name = Field::Present(name);
        self.lifecycle.touch();
        Ok(())
    }

    pub fn edit_email(&mut self, email: Email, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.email = Field::Present(email);
        self.lifecycle.touch();
        Ok(())
    }

    fn guard(&self, operator: &Operator) -> DomainResult<()> {
        self.lifecycle
            .guard_mutation(self.id == *operator.id(), AGGREGATE)
    }
}

impl Entity for UserIdentity {
    type Id = SystemUserId;

    fn id(&self) -> &SystemUserId {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl PartialEq for UserIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for UserIdentity {}
