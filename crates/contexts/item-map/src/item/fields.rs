//! Item field value objects.

use kernel::json::{expect_array, expect_str};
use kernel::{
    normalize_line_endings, DomainError, DomainResult, RangeViolation, TextPolicy,
    MAX_CONTENT_LENGTH, MAX_KEYWORDS, MAX_KEYWORD_LENGTH, MAX_TITLE_LENGTH,
};
use serde_json::Value;

kernel::unique_id!(
    /// Identifier of an item
    ItemId
);

const TITLE_POLICY: TextPolicy = TextPolicy::new("item title", MAX_TITLE_LENGTH);
const KEYWORD_POLICY: TextPolicy = TextPolicy::new("item keyword", MAX_KEYWORD_LENGTH);
const CONTENT_POLICY: TextPolicy =
    TextPolicy::new("item content", MAX_CONTENT_LENGTH).allowing_controls(&['\n', '\t']);

/// Item title: 1-100 characters, no control characters, not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    pub fn new(title: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        TITLE_POLICY.check(&title)?;
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Single item keyword: 1-30 characters, no control characters, not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKeyword(String);

impl ItemKeyword {
    pub fn new(keyword: impl Into<String>) -> DomainResult<Self> {
        let keyword = keyword.into();
        KEYWORD_POLICY.check(&keyword)?;
        Ok(Self(keyword))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered list of 1-5 keywords.
///
/// Equality is positional: the same keywords in a different order are a
/// different value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKeywords(Vec<ItemKeyword>);

impl ItemKeywords {
    pub fn new<I, S>(keywords: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<S> = keywords.into_iter().collect();
        Self::check_count(keywords.len())?;

        keywords
            .into_iter()
            .map(ItemKeyword::new)
            .collect::<DomainResult<Vec<_>>>()
            .map(Self)
    }

    /// Build from an untyped JSON array (e.g. a persisted JSON column).
    ///
    /// # Errors
    /// `DomainError::Type` for a non-array input or a non-string element,
    /// otherwise the same errors as [`ItemKeywords::new`].
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let elements = expect_array("item keywords", value)?;
        Self::check_count(elements.len())?;

        elements
            .iter()
            .map(|element| expect_str("item keyword", element).and_then(ItemKeyword::new))
            .collect::<DomainResult<Vec<_>>>()
            .map(Self)
    }

    pub fn keywords(&self) -> &[ItemKeyword] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemKeyword> {
        self.0.iter()
    }

    /// Keywords as plain strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|k| k.as_str().to_string()).collect()
    }

    fn check_count(count: usize) -> DomainResult<()> {
        if count == 0 {
            return Err(DomainError::range("item keywords", RangeViolation::NoElements));
        }
        if count > MAX_KEYWORDS {
            return Err(DomainError::range(
                "item keywords",
                RangeViolation::TooMany { max: MAX_KEYWORDS },
            ));
        }
        Ok(())
    }
}

/// Item body text.
///
/// CRLF and CR are normalized to LF before any other check. Up to 5000
/// characters; line feed and tab are the only control characters allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContent(String);

impl ItemContent {
    pub fn new(content: impl AsRef<str>) -> DomainResult<Self> {
        let content = normalize_line_endings(content.as_ref());
        CONTENT_POLICY.check(&content)?;
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

kernel::value_object!(ItemTitle, ItemKeyword, ItemKeywords, ItemContent);

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::ValueEquality;
    use serde_json::json;

    fn violation<T: std::fmt::Debug>(result: DomainResult<T>) -> Option<RangeViolation> {
        result.unwrap_err().range_violation()
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(ItemTitle::new("a").is_ok());
        assert!(ItemTitle::new("a".repeat(100)).is_ok());
        assert_eq!(violation(ItemTitle::new("")), Some(RangeViolation::Empty));
        assert_eq!(
            violation(ItemTitle::new("a".repeat(101))),
            Some(RangeViolation::TooLong { max: 100 })
        );
    }

    #[test]
    fn test_title_rejects_control_and_blank() {
        assert_eq!(
            violation(ItemTitle::new("line\nbreak")),
            Some(RangeViolation::ForbiddenCharacter)
        );
        assert_eq!(
            violation(ItemTitle::new("\u{3000} \u{a0}")),
            Some(RangeViolation::Blank)
        );
    }

    #[test]
    fn test_keyword_limit_is_thirty() {
        assert!(ItemKeyword::new("k".repeat(30)).is_ok());
        assert_eq!(
            violation(ItemKeyword::new("k".repeat(31))),
            Some(RangeViolation::TooLong { max: 30 })
        );
    }

    #[test]
    fn test_keywords_cardinality() {
        assert_eq!(
            violation(ItemKeywords::new(Vec::<String>::new())),
            Some(RangeViolation::NoElements)
        );
        assert_eq!(
            violation(ItemKeywords::new(["a", "b", "c", "d", "e", "f"])),
            Some(RangeViolation::TooMany { max: 5 })
        );
        assert_eq!(ItemKeywords::new(["a"]).unwrap().len(), 1);
        assert_eq!(ItemKeywords::new(["a", "b", "c", "d", "e"]).unwrap().len(), 5);
    }

    #[test]
    fn test_keywords_preserve_order() {
        let keywords = ItemKeywords::new(["rust", "ddd", "map"]).unwrap();
        assert_eq!(keywords.to_strings(), vec!["rust", "ddd", "map"]);
        assert_ne!(keywords, ItemKeywords::new(["ddd", "rust", "map"]).unwrap());
    }

    #[test]
    fn test_keywords_validate_each_element() {
        assert_eq!(
            violation(ItemKeywords::new(["ok", "   "])),
            Some(RangeViolation::Blank)
        );
    }

    #[test]
    fn test_keywords_from_json() {
        let keywords = ItemKeywords::from_json(&json!(["a", "b"])).unwrap();
        assert_eq!(keywords.to_strings(), vec!["a", "b"]);

        let err = ItemKeywords::from_json(&json!(["a", 3])).unwrap_err();
        assert_eq!(err, DomainError::wrong_type("item keyword", "string", "number"));

        let err = ItemKeywords::from_json(&json!("a,b")).unwrap_err();
        assert_eq!(err, DomainError::wrong_type("item keywords", "array", "string"));

        assert_eq!(
            violation(ItemKeywords::from_json(&json!([]))),
            Some(RangeViolation::NoElements)
        );
    }

    #[test]
    fn test_content_normalizes_line_endings() {
        let crlf = ItemContent::new("first\r\nsecond\rthird").unwrap();
        let lf = ItemContent::new("first\nsecond\nthird").unwrap();
        assert_eq!(crlf, lf);
        assert!(crlf.equals(&lf).unwrap());
        assert_eq!(crlf.as_str(), "first\nsecond\nthird");
    }

    #[test]
    fn test_content_limits() {
        assert!(ItemContent::new("x".repeat(5000)).is_ok());
        assert_eq!(
            violation(ItemContent::new("x".repeat(5001))),
            Some(RangeViolation::TooLong { max: 5000 })
        );
        // 2500 CRLF pairs collapse to 2500 characters
        assert!(ItemContent::new("\r\na".repeat(2500)).is_ok());
        assert_eq!(violation(ItemContent::new("")), Some(RangeViolation::Empty));
        assert_eq!(
            violation(ItemContent::new("\r\n \t\u{3000}")),
            Some(RangeViolation::Blank)
        );
        assert_eq!(
            violation(ItemContent::new("bell\u{7}")),
            Some(RangeViolation::ForbiddenCharacter)
        );
        assert!(ItemContent::new("col\tcol\nrow").is_ok());
    }

    #[test]
    fn test_title_and_keyword_do_not_compare() {
        let err = ItemTitle::new("same")
            .unwrap()
            .equals(&ItemKeyword::new("same").unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::TypeMismatch { .. }));
    }
}
