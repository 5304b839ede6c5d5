//! Map identifier and title.

use kernel::{DomainResult, TextPolicy, MAX_TITLE_LENGTH};

kernel::unique_id!(
    /// Identifier of a map
    MapId
);

const TITLE_POLICY: TextPolicy = TextPolicy::new("map title", MAX_TITLE_LENGTH);

/// Map title, same rules as an item title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTitle(String);

impl MapTitle {
    pub fn new(title: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        TITLE_POLICY.check(&title)?;
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

kernel::value_object!(MapTitle);
