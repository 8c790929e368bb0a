//! Region and category facets.

use super::common::{ids, make_record, make_soon_record, sample_catalog};
use onelink_search::{search, CategoryFilters, QueryState, Region, RegionFilter, Status};

#[test]
fn test_region_filter_keeps_only_region() {
    let catalog = sample_catalog();
    for region in Region::ALL {
        let state = QueryState {
            region: RegionFilter::Only(region),
            ..QueryState::default()
        };
        let results = search(catalog.records(), &state);
        assert!(!results.is_empty(), "{} has records", region);
        assert!(results.iter().all(|r| r.region == region));
    }
}

#[test]
fn test_region_all_is_no_filter() {
    let catalog = sample_catalog();
    let state = QueryState {
        region: RegionFilter::parse("all"),
        ..QueryState::default()
    };
    assert_eq!(search(catalog.records(), &state).len(), catalog.len());
}

#[test]
fn test_mistyped_region_selects_nothing() {
    let catalog = sample_catalog();
    let state = QueryState {
        region: RegionFilter::parse("ksa"),
        ..QueryState::default()
    };
    assert!(search(catalog.records(), &state).is_empty());
}

#[test]
fn test_upcoming_service_is_searchable_but_not_actionable() {
    let records = vec![
        make_record("a1", "Absher", Region::Sa, "unified"),
        make_soon_record("a4", "Nafath", Region::Sa, "identity"),
    ];
    let state = QueryState {
        region: RegionFilter::Only(Region::Sa),
        ..QueryState::with_query("nafath")
    };
    let results = search(&records, &state);

    assert_eq!(ids(&results), vec!["a4"]);
    assert_eq!(results[0].status, Status::Soon);
    assert!(!results[0].is_actionable());
}

#[test]
fn test_single_category_filter() {
    let catalog = sample_catalog();
    let mut state = QueryState::default();
    state.filters.toggle("unified");

    let results = search(catalog.records(), &state);
    assert_eq!(ids(&results), vec!["a1", "e1", "c1"]);
}

#[test]
fn test_category_filters_are_or() {
    let catalog = sample_catalog();
    let mut state = QueryState::default();
    state.filters.toggle("tax");
    state.filters.toggle("travel");

    let results = search(catalog.records(), &state);
    assert_eq!(ids(&results), vec!["e2", "g1"]);
}

#[test]
fn test_toggle_twice_clears() {
    let catalog = sample_catalog();
    let mut state = QueryState::default();
    assert!(state.filters.toggle("tax"));
    assert!(!state.filters.toggle("tax"));
    assert!(state.filters.is_empty());
    assert_eq!(search(catalog.records(), &state).len(), catalog.len());
}

#[test]
fn test_alias_maps_to_category() {
    let catalog = sample_catalog();
    let mut state = QueryState {
        filters: CategoryFilters::with_aliases([("courts", "justice")]),
        ..QueryState::default()
    };
    state.filters.toggle("courts");

    let results = search(catalog.records(), &state);
    assert_eq!(ids(&results), vec!["a2"]);
}

#[test]
fn test_facets_and_query_combine() {
    let catalog = sample_catalog();
    let mut state = QueryState::with_query("egypt");
    state.region = RegionFilter::Only(Region::Eg);
    state.filters.toggle("tax");

    let results = search(catalog.records(), &state);
    assert_eq!(ids(&results), vec!["e2"]);
}
