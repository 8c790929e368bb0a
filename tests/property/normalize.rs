//! Normalization invariants.

use super::strategies::messy_text_strategy;
use onelink_search::{normalize, parse_query};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(text in messy_text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_output_is_clean(text in messy_text_strategy()) {
        let out = normalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| matches!(c, 'أ' | 'إ' | 'آ' | 'ٱ' | 'ى' | 'ة')));
        prop_assert!(!out.chars().any(char::is_uppercase));
    }

    #[test]
    fn query_tokens_are_never_empty(text in messy_text_strategy()) {
        for token in parse_query(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
        }
    }
}

#[test]
fn normalize_empty_and_mixed() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(&normalize("  Absher | أبشر  ")), normalize("  Absher | أبشر  "));
}
