//! Email address with syntax and domain existence checks.

use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

use kernel::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// DNS record types that prove a mail domain exists, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Mx,
    A,
    Aaaa,
}

impl RecordKind {
    pub const LOOKUP_ORDER: [RecordKind; 3] = [RecordKind::Mx, RecordKind::A, RecordKind::Aaaa];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Mx => f.write_str("MX"),
            RecordKind::A => f.write_str("A"),
            RecordKind::Aaaa => f.write_str("AAAA"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("DNS lookup timed out")]
    Timeout,

    #[error("DNS I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid nameserver address: {0}")]
    InvalidNameserver(String),

    #[error("Malformed DNS message: {0}")]
    Malformed(String),
}

/// Answers whether a domain has a record of the given kind.
///
/// Implementations block until an answer arrives or their timeout expires.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait DomainResolver: Send + Sync {
    fn has_record(&self, domain: &str, kind: RecordKind) -> Result<bool, ResolveError>;
}

/// Syntactically valid address whose domain has an MX, A or AAAA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Validate `address` and look up its domain with `resolver`.
    ///
    /// # Errors
    /// `DomainError::Format` for bad syntax, a bracketed domain literal, a
    /// domain without records, or a failed lookup.
    pub fn new(address: impl Into<String>, resolver: &dyn DomainResolver) -> DomainResult<Self> {
        let address = address.into();
        let domain = Self::checked_domain(&address)?;

        for kind in RecordKind::LOOKUP_ORDER {
            match resolver.has_record(domain, kind) {
                Ok(true) => return Ok(Self(address)),
                Ok(false) => {}
                Err(e) => {
                    return Err(DomainError::format(
                        "email",
                        format!("lookup of {} failed: {}", domain, e),
                    ))
                }
            }
        }

        Err(DomainError::format(
            "email",
            format!("domain {} has no mail host", domain),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part of the address
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    fn checked_domain(address: &str) -> DomainResult<&str> {
        if !address.validate_email() {
            return Err(DomainError::format(
                "email",
                format!("'{}' is not an email address", address),
            ));
        }

        match address.rsplit_once('@') {
            Some((_, domain)) if !domain.is_empty() && !domain.contains('[') => Ok(domain),
            _ => Err(DomainError::format(
                "email",
                format!("'{}' has no usable domain", address),
            )),
        }
    }
}

kernel::value_object!(Email);
