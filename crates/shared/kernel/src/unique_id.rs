//! Canonical identifier shared by every aggregate.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::UNIQUE_ID_PATTERN;
use crate::error::{DomainError, DomainResult};

static UNIQUE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(UNIQUE_ID_PATTERN).expect("valid unique id regex"));

/// 32 lowercase alphanumerics without hyphens.
///
/// Concept-specific identifiers (`ItemId`, `MapId`, ...) wrap this type via
/// [`unique_id!`](crate::unique_id) so they cannot be mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueId(String);

impl UniqueId {
    /// Parse an identifier in canonical form.
    ///
    /// # Errors
    /// Returns `DomainError::Format` unless `id` is 32 lowercase alphanumerics.
    pub fn parse(id: &str) -> DomainResult<Self> {
        if !Self::is_valid(id) {
            return Err(DomainError::format("id", format!("'{}' is not a 32-character id", id)));
        }
        Ok(Self(id.to_string()))
    }

    /// Fresh identifier from a random version-4 UUID with hyphens stripped.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Parse `id` when given, otherwise generate a fresh identifier.
    pub fn parse_or_generate(id: Option<&str>) -> DomainResult<Self> {
        match id {
            Some(id) => Self::parse(id),
            None => Ok(Self::generate()),
        }
    }

    /// Check whether `id` is in canonical form
    pub fn is_valid(id: &str) -> bool {
        UNIQUE_ID_RE.is_match(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UniqueId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UniqueId> for String {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

crate::value_object!(UniqueId);

/// Declare a concept-specific identifier newtype over [`UniqueId`].
///
/// ```rust,ignore
/// kernel::unique_id!(
///     /// Identifier of a widget
///     WidgetId
/// );
///
/// let id = WidgetId::generate();
/// assert_eq!(WidgetId::parse(id.as_str()).unwrap(), id);
/// ```
#[macro_export]
macro_rules! unique_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($crate::UniqueId);

        impl $name {
            /// Parse an identifier in canonical form.
            pub fn parse(id: &str) -> $crate::DomainResult<Self> {
                $crate::UniqueId::parse(id).map(Self)
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                Self($crate::UniqueId::generate())
            }

            /// Parse `id` when given, otherwise generate a fresh identifier.
            pub fn parse_or_generate(id: Option<&str>) -> $crate::DomainResult<Self> {
                $crate::UniqueId::parse_or_generate(id).map(Self)
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn as_unique_id(&self) -> &$crate::UniqueId {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        $crate::value_object!($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_canonical() {
        let id = UniqueId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(UniqueId::is_valid(id.as_str()));
    }

    #[test]
    fn test_parse_rejects_hyphens_and_uppercase() {
        assert!(UniqueId::parse("0123456789abcdef0123456789abcdef").is_ok());
        assert!(UniqueId::parse("01234567-89ab-cdef-0123-456789abcdef").is_err());
        assert!(UniqueId::parse("0123456789ABCDEF0123456789ABCDEF").is_err());
        assert!(UniqueId::parse("0123456789abcdef0123456789abcde").is_err());
        assert!(UniqueId::parse("").is_err());
    }

    #[test]
    fn test_parse_error_is_format_error() {
        let err = UniqueId::parse("nope").unwrap_err();
        assert!(matches!(err, DomainError::Format { field: "id", .. }));
    }

    #[test]
    fn test_parse_or_generate() {
        let given = "abcdefghijklmnopqrstuvwxyz012345";
        assert_eq!(UniqueId::parse_or_generate(Some(given)).unwrap().as_str(), given);
        assert!(UniqueId::parse_or_generate(None).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<UniqueId, _> = serde_json::from_str("\"0123456789abcdef0123456789abcdef\"");
        assert!(ok.is_ok());
        let bad: Result<UniqueId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(bad.is_err());
    }
}
