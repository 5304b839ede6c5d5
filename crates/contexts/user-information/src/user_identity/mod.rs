//! UserIdentity aggregate and its value objects.

mod aggregate;
mod email;
mod factory;
mod fields;
mod repository;
mod resolver;

pub use aggregate::UserIdentity;
pub use email::{DomainResolver, Email, RecordKind, ResolveError};
pub use factory::{
    NewUserIdentity, RestoreDeletedUserIdentity, RestoreUserIdentity, UserIdentityFactory,
};
pub use fields::{Operator, PublicUserId, SystemUserId, UserName};
pub use repository::UserIdentityRepository;
pub use resolver::UdpDnsResolver;

#[cfg(any(test, feature = "test-utils"))]
pub use email::MockDomainResolver;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserIdentityRepository;
