//! Property tests for the shared free-text policy and identifier forms.

use proptest::prelude::*;

use kernel::{IdTranslator, RangeViolation, TextPolicy, UniqueId, MAX_TITLE_LENGTH};

const TITLE: TextPolicy = TextPolicy::new("title", MAX_TITLE_LENGTH);

proptest! {
    #[test]
    fn prop_visible_text_within_limit_passes(text in "[a-zA-Z0-9あ-ん]{1,100}") {
        prop_assert!(TITLE.check(&text).is_ok());
    }

    #[test]
    fn prop_text_over_limit_is_too_long(text in "[a-z]{101,150}") {
        let err = TITLE.check(&text).unwrap_err();
        prop_assert_eq!(err.range_violation(), Some(RangeViolation::TooLong { max: 100 }));
    }

    #[test]
    fn prop_blank_only_text_is_blank(text in "[ \u{a0}\u{3000}]{1,100}") {
        let err = TITLE.check(&text).unwrap_err();
        prop_assert_eq!(err.range_violation(), Some(RangeViolation::Blank));
    }

    #[test]
    fn prop_any_control_character_is_forbidden(
        prefix in "[a-z]{0,10}",
        control in prop::sample::select(vec!['\u{0}', '\n', '\r', '\t', '\u{1b}', '\u{7f}']),
    ) {
        let text = format!("{}{}x", prefix, control);
        let err = TITLE.check(&text).unwrap_err();
        prop_assert_eq!(err.range_violation(), Some(RangeViolation::ForbiddenCharacter));
    }

    #[test]
    fn prop_generated_ids_round_trip_through_hyphenated_form(_seed in any::<u8>()) {
        let id = UniqueId::generate();
        let external = IdTranslator::to_id(id.as_str()).unwrap();
        prop_assert_eq!(external.len(), 36);
        prop_assert_eq!(IdTranslator::to_resource(&external).unwrap(), id.as_str());
    }
}
