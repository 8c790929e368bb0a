//! Edit distance and fuzzy-score monotonicity.

use super::common::make_record;
use super::strategies::word_strategy;
use onelink_search::{levenshtein, levenshtein_bounded, score, Region};
use proptest::prelude::*;

proptest! {
    #[test]
    fn levenshtein_is_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_empty_is_length(a in word_strategy()) {
        prop_assert_eq!(levenshtein("", &a), a.chars().count());
    }

    #[test]
    fn bounded_agrees_with_full(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        let full = levenshtein(&a, &b);
        prop_assert_eq!(levenshtein_bounded(&a, &b, max), (full <= max).then_some(full));
    }

    #[test]
    fn closer_token_scores_higher(word in "[a-z]{6,8}") {
        let mut record = make_record("r", &word, Region::Sa, "unified");
        record.url = None;

        // Distance 2: replace the first two characters with a letter absent from [a-z]
        let far: String = "00".chars().chain(word.chars().skip(2)).collect();
        let exact = score(&record, &[word.clone()]);
        let fuzzy = score(&record, &[far]);

        prop_assert!(exact > fuzzy, "{} vs {}", exact, fuzzy);
        prop_assert!(fuzzy > 0);
    }
}
