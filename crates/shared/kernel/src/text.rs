//! Shared policy for free-text fields (titles, keywords, content, names).

use crate::constants::BLANK_CHARACTERS;
use crate::error::{DomainError, DomainResult, RangeViolation};

/// Length, charset and blankness rules for one free-text field.
///
/// Checks run in a fixed order and stop at the first violation: empty,
/// too long, forbidden character, blank. Lengths count Unicode scalar
/// values, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct TextPolicy {
    field: &'static str,
    max_length: usize,
    allowed_controls: &'static [char],
}

impl TextPolicy {
    pub const fn new(field: &'static str, max_length: usize) -> Self {
        Self {
            field,
            max_length,
            allowed_controls: &[],
        }
    }

    /// Accept the given ASCII control characters (e.g. line feed in content).
    pub const fn allowing_controls(mut self, controls: &'static [char]) -> Self {
        self.allowed_controls = controls;
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate `text` against this policy.
    ///
    /// # Errors
    /// Returns `DomainError::Range` naming the first rule that failed.
    pub fn check(&self, text: &str) -> DomainResult<()> {
        if text.is_empty() {
            return Err(self.violation(RangeViolation::Empty));
        }
        if text.chars().count() > self.max_length {
            return Err(self.violation(RangeViolation::TooLong {
                max: self.max_length,
            }));
        }
        if text.chars().any(|c| self.is_forbidden(c)) {
            return Err(self.violation(RangeViolation::ForbiddenCharacter));
        }
        if is_blank(text) {
            return Err(self.violation(RangeViolation::Blank));
        }
        Ok(())
    }

    fn is_forbidden(&self, c: char) -> bool {
        c.is_ascii_control() && !self.allowed_controls.contains(&c)
    }

    fn violation(&self, violation: RangeViolation) -> DomainError {
        DomainError::range(self.field, violation)
    }
}

/// True when `text` has no character other than ASCII controls and the
/// blank characters (space, no-break space, ideographic space).
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_control() || BLANK_CHARACTERS.contains(&c))
}

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
