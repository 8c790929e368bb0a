//! Did-you-mean and autocomplete over the sample catalog.

use super::common::{ids, sample_catalog};
use onelink_search::search::did_you_mean_candidates;
use onelink_search::{autocomplete, did_you_mean, parse_query, MAX_EDIT_DISTANCE};

#[test]
fn test_did_you_mean_latin_typo() {
    let catalog = sample_catalog();
    let got = did_you_mean(catalog.records(), "tawakalna", 3);
    assert_eq!(ids(&got), vec!["a3"]);
}

#[test]
fn test_did_you_mean_arabic_typo() {
    let catalog = sample_catalog();
    // ر for ز: one substitution away from ناجز
    let got = did_you_mean(catalog.records(), "ناجر", 3);
    assert_eq!(ids(&got), vec!["a2"]);
}

#[test]
fn test_did_you_mean_ignores_script_mismatch() {
    let catalog = sample_catalog();
    // a2's display name is Arabic; a Latin misspelling is too far from it
    let got = did_you_mean(catalog.records(), "najz", 3);
    assert!(got.iter().all(|r| r.id != "a2"));
}

#[test]
fn test_did_you_mean_bounds() {
    let catalog = sample_catalog();
    for query in ["abshr", "egipt", "pasport", "gov", "x", "digital egypt"] {
        let tokens = parse_query(query);
        let candidates = did_you_mean_candidates(catalog.records(), &tokens, MAX_EDIT_DISTANCE);
        assert!(candidates.iter().all(|c| c.distance <= MAX_EDIT_DISTANCE && c.score > 0));
        for pair in candidates.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert!(did_you_mean(catalog.records(), query, 3).len() <= 3);
    }
}

#[test]
fn test_did_you_mean_empty_query() {
    let catalog = sample_catalog();
    assert!(did_you_mean(catalog.records(), "", 3).is_empty());
}

#[test]
fn test_autocomplete_orders_by_score() {
    let catalog = sample_catalog();
    let base: Vec<_> = catalog.records().iter().collect();
    let got = autocomplete(&base, &parse_query("eg"), 8);
    assert_eq!(ids(&got[..2]), vec!["e2", "e1"]);
    assert!(got.len() <= 8);
}

#[test]
fn test_autocomplete_limit_and_empty() {
    let catalog = sample_catalog();
    let base: Vec<_> = catalog.records().iter().collect();
    assert_eq!(autocomplete(&base, &parse_query("eg"), 1).len(), 1);
    assert!(autocomplete(&base, &[], 8).is_empty());
}

#[test]
fn test_autocomplete_respects_base() {
    let catalog = sample_catalog();
    let base: Vec<_> = catalog.records().iter().filter(|r| r.id == "e1").collect();
    let got = autocomplete(&base, &parse_query("egypt"), 8);
    assert_eq!(ids(&got), vec!["e1"]);
}
