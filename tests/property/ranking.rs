//! Pipeline invariants over random catalogs.

use super::strategies::{catalog_strategy, name_strategy, region_strategy};
use onelink_search::{compare_names, rank, search, QueryState, RegionFilter, MAX_EDIT_DISTANCE};
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    #[test]
    fn region_filter_is_correct(records in catalog_strategy(), region in region_strategy()) {
        let state = QueryState {
            region: RegionFilter::Only(region),
            ..QueryState::default()
        };
        let results = search(&records, &state);
        prop_assert!(results.iter().all(|r| r.region == region));
        prop_assert_eq!(results.len(), records.iter().filter(|r| r.region == region).count());
    }

    #[test]
    fn empty_query_returns_all_sorted_by_name(records in catalog_strategy()) {
        let results = search(&records, &QueryState::default());
        prop_assert_eq!(results.len(), records.len());
        for pair in results.windows(2) {
            prop_assert_ne!(compare_names(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
    }

    #[test]
    fn ranking_is_ordered(records in catalog_strategy(), query in name_strategy()) {
        let ranked = rank(&records, &QueryState::with_query(query.as_str()), MAX_EDIT_DISTANCE);
        for pair in ranked.windows(2) {
            let ord = pair[1].score.cmp(&pair[0].score)
                .then_with(|| compare_names(&pair[0].record.name, &pair[1].record.name));
            prop_assert_ne!(ord, Ordering::Greater);
            if ord == Ordering::Equal {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn search_is_deterministic(records in catalog_strategy(), query in name_strategy()) {
        let state = QueryState::with_query(query.as_str());
        let first: Vec<&str> = search(&records, &state).iter().map(|r| r.id.as_str()).collect();
        let second: Vec<&str> = search(&records, &state).iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(first, second);
    }
}
