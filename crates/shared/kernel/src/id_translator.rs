//! Conversion between the canonical identifier and its hyphenated form.
//!
//! The canonical form (`resource`) is what aggregates store. The hyphenated
//! 8-4-4-4-12 form (`id`) is what leaves the system. Each direction checks
//! its own input pattern before converting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{HYPHENATED_GROUPS, HYPHENATED_ID_PATTERN, UNIQUE_ID_LENGTH};
use crate::error::{DomainError, DomainResult};
use crate::unique_id::UniqueId;

static HYPHENATED_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(HYPHENATED_ID_PATTERN).expect("valid hyphenated id regex"));

/// Stateless translator between identifier representations.
pub struct IdTranslator;

impl IdTranslator {
    /// Render a canonical 32-character identifier in hyphenated form.
    ///
    /// # Errors
    /// Returns `DomainError::Format` unless `resource` is canonical.
    pub fn to_id(resource: &str) -> DomainResult<String> {
        if !UniqueId::is_valid(resource) {
            return Err(DomainError::format(
                "resource",
                format!("'{}' is not a {}-character id", resource, UNIQUE_ID_LENGTH),
            ));
        }

        let mut id = String::with_capacity(UNIQUE_ID_LENGTH + HYPHENATED_GROUPS.len() - 1);
        let mut start = 0;
        for width in HYPHENATED_GROUPS {
            if start > 0 {
                id.push('-');
            }
            id.push_str(&resource[start..start + width]);
            start += width;
        }
        Ok(id)
    }

    /// Strip the hyphens from an 8-4-4-4-12 identifier.
    ///
    /// # Errors
    /// Returns `DomainError::Format` unless `id` is hyphenated 8-4-4-4-12.
    pub fn to_resource(id: &str) -> DomainResult<String> {
        if !HYPHENATED_ID_RE.is_match(id) {
            return Err(DomainError::format(
                "id",
                format!("'{}' is not an 8-4-4-4-12 id", id),
            ));
        }
        let mut resource = String::with_capacity(UNIQUE_ID_LENGTH);
        resource.extend(id.chars().filter(|c| *c != '-'));
        Ok(resource)
    }
}
