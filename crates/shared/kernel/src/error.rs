//! Domain-level errors.
//!
//! These errors represent business rule violations inside the kernel and
//! the aggregates built on it. They are independent of persistence and
//! presentation concerns.

use std::fmt;

use thiserror::Error;

/// The rule a length, cardinality or blankness check tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// Empty string
    Empty,
    /// Longer than the field allows
    TooLong { max: usize },
    /// Shorter than the field allows
    TooShort { min: usize },
    /// Contains a character the field does not accept
    ForbiddenCharacter,
    /// Only whitespace (and, for content, line breaks)
    Blank,
    /// Collection without elements
    NoElements,
    /// Collection with more elements than allowed
    TooMany { max: usize },
    /// Relation holding the same parent/child pair twice
    DuplicateConnection,
    /// Timestamps out of order
    OutOfOrder,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::Empty => write!(f, "is empty"),
            RangeViolation::TooLong { max } => write!(f, "exceeds {} characters", max),
            RangeViolation::TooShort { min } => write!(f, "is shorter than {} characters", min),
            RangeViolation::ForbiddenCharacter => write!(f, "contains a forbidden character"),
            RangeViolation::Blank => write!(f, "contains no visible character"),
            RangeViolation::NoElements => write!(f, "has no elements"),
            RangeViolation::TooMany { max } => write!(f, "has more than {} elements", max),
            RangeViolation::DuplicateConnection => write!(f, "contains the same connection twice"),
            RangeViolation::OutOfOrder => write!(f, "is earlier than its creation time"),
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Pattern mismatch on an identifier or structured value
    #[error("Format error: {field} {reason}")]
    Format { field: &'static str, reason: String },

    /// Length, cardinality or blankness violation
    #[error("Range error: {field} {violation}")]
    Range {
        field: &'static str,
        violation: RangeViolation,
    },

    /// An untyped input element had the wrong type
    #[error("Type error: {field} expected {expected}, found {found}")]
    Type {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Value object compared against an incompatible type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Operator is not the owner of the aggregate
    #[error("Operation by a user other than the owner")]
    Authorization,

    /// Mutation attempted on a soft-deleted aggregate
    #[error("{0} has already been deleted")]
    AlreadyDeleted(&'static str),
}

impl DomainError {
    /// Create a format error
    pub fn format(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::Format {
            field,
            reason: reason.into(),
        }
    }

    /// Create a range error
    pub fn range(field: &'static str, violation: RangeViolation) -> Self {
        DomainError::Range { field, violation }
    }

    /// Create a type error for an untyped input element
    pub fn wrong_type(field: &'static str, expected: &'static str, found: &'static str) -> Self {
        DomainError::Type {
            field,
            expected,
            found,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        DomainError::TypeMismatch { expected, found }
    }

    /// The range rule that triggered, if this is a range error
    pub fn range_violation(&self) -> Option<RangeViolation> {
        match self {
            DomainError::Range { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
