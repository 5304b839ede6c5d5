//! User-information bounded context.
//!
//! Holds the account-level identity of a user: public handle, display name
//! and a verified email address.

pub mod application;
pub mod dto;
pub mod user_identity;

pub use application::{EditUserIdentity, UserIdentityApplicationService};
pub use dto::UserIdentityDto;
pub use user_identity::{
    DomainResolver, Email, NewUserIdentity, Operator, PublicUserId, RecordKind, ResolveError,
    RestoreDeletedUserIdentity, RestoreUserIdentity, SystemUserId, UdpDnsResolver, UserIdentity,
    UserIdentityFactory, UserIdentityRepository, UserName,
};

#[cfg(any(test, feature = "test-utils"))]
pub use user_identity::{MockDomainResolver, MockUserIdentityRepository};
