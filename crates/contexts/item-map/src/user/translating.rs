//! Boundary translation of user identifiers.

use kernel::DomainResult;

use super::{Author, Operator, UserId, UserService};

/// `UserService` that parses the raw identifier into a `UserId`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranslatingUserService;

impl TranslatingUserService {
    pub fn new() -> Self {
        Self
    }
}

impl UserService for TranslatingUserService {
    fn author_from(&self, id: &str) -> DomainResult<Author> {
        UserId::parse(id).map(Author::new)
    }

    fn operator_from(&self, id: &str) -> DomainResult<Operator> {
        UserId::parse(id).map(Operator::new)
    }
}
