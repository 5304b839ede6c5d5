//! Owner references inside the item-map context.
//!
//! Users live in the user-information context. Here they are only an
//! identifier, translated at the boundary into an `Author` (owner of an
//! aggregate) or an `Operator` (user performing an operation).

mod translating;

pub use translating::TranslatingUserService;

use kernel::DomainResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

kernel::unique_id!(
    /// Identifier of a user as seen from the item-map context
    UserId
);

/// Owner of an item or map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: UserId,
}

impl Author {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Check whether `operator` is this author
    pub fn is(&self, operator: &Operator) -> bool {
        self.id == operator.id
    }
}

/// User performing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    id: UserId,
}

impl Operator {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
}

kernel::value_object!(Author, Operator);

/// Translates raw user identifiers from the user-information context.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserService: Send + Sync {
    /// Owner reference for `id`
    fn author_from(&self, id: &str) -> DomainResult<Author>;

    /// Operator reference for `id`
    fn operator_from(&self, id: &str) -> DomainResult<Operator>;
}
