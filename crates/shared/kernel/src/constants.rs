//! Domain-level constants.
//!
//! These constants define the validation limits shared by both contexts.

// =============================================================================
// Identifiers
// =============================================================================

/// Canonical identifier: 32 lowercase alphanumerics, no hyphens
pub const UNIQUE_ID_PATTERN: &str = r"\A[a-z0-9]{32}\z";

/// External identifier: 8-4-4-4-12 hyphenated groups
pub const HYPHENATED_ID_PATTERN: &str =
    r"\A[a-z0-9]{8}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{12}\z";

/// Length of the canonical identifier
pub const UNIQUE_ID_LENGTH: usize = 32;

/// Group widths of the hyphenated representation
pub const HYPHENATED_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

// =============================================================================
// Free text
// =============================================================================

/// Maximum length of an item or map title
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of item content (after line-ending normalization)
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// Maximum length of a single keyword
pub const MAX_KEYWORD_LENGTH: usize = 30;

/// Maximum length of a user name
pub const MAX_USER_NAME_LENGTH: usize = 20;

/// Characters that do not count as content when checking for blank text:
/// ASCII space, NO-BREAK SPACE (U+00A0) and IDEOGRAPHIC SPACE (U+3000)
pub const BLANK_CHARACTERS: &[char] = &['\u{0020}', '\u{00A0}', '\u{3000}'];

// =============================================================================
// Collections
// =============================================================================

/// Maximum number of keywords on an item
pub const MAX_KEYWORDS: usize = 5;

// =============================================================================
// User identity
// =============================================================================

/// Minimum length of a public user id
pub const MIN_PUBLIC_USER_ID_LENGTH: usize = 3;

/// Maximum length of a public user id
pub const MAX_PUBLIC_USER_ID_LENGTH: usize = 20;

// =============================================================================
// Display
// =============================================================================

/// Fixed display offset for rendered timestamps (Asia/Tokyo, no DST)
pub const DISPLAY_UTC_OFFSET_SECONDS: i32 = 9 * 3600;

/// Format used when timestamps are rendered for presentation
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
