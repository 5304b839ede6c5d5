//! Identifier, public id and display name of a user.

use once_cell::sync::Lazy;
use regex::Regex;

use kernel::{
    DomainError, DomainResult, RangeViolation, TextPolicy, MAX_PUBLIC_USER_ID_LENGTH,
    MAX_USER_NAME_LENGTH, MIN_PUBLIC_USER_ID_LENGTH,
};

static PUBLIC_ID_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[A-Za-z0-9_]*\z").expect("valid public id regex"));

kernel::unique_id!(
    /// Internal identifier of a user
    SystemUserId
);

/// Handle shown to other users: 3-20 ASCII letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUserId(String);

impl PublicUserId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let length = id.chars().count();

        if length < MIN_PUBLIC_USER_ID_LENGTH {
            return Err(DomainError::range(
                "public user id",
                RangeViolation::TooShort {
                    min: MIN_PUBLIC_USER_ID_LENGTH,
                },
            ));
        }
        if length > MAX_PUBLIC_USER_ID_LENGTH {
            return Err(DomainError::range(
                "public user id",
                RangeViolation::TooLong {
                    max: MAX_PUBLIC_USER_ID_LENGTH,
                },
            ));
        }
        if !PUBLIC_ID_CHARSET_RE.is_match(&id) {
            return Err(DomainError::range(
                "public user id",
                RangeViolation::ForbiddenCharacter,
            ));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const NAME_POLICY: TextPolicy = TextPolicy::new("user name", MAX_USER_NAME_LENGTH);

/// Display name: up to 20 characters, no control characters, not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        NAME_POLICY.check(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User performing an operation on an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    id: SystemUserId,
}

impl Operator {
    pub fn new(id: SystemUserId) -> Self {
        Self { id }
    }

    /// Parse the operator's raw identifier
    pub fn parse(id: &str) -> DomainResult<Self> {
        SystemUserId::parse(id).map(Self::new)
    }

    pub fn id(&self) -> &SystemUserId {
        &self.id
    }
}

kernel::value_object!(PublicUserId, UserName, Operator);
