// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filters and the ranked result list.
//!
//! Facets are hard filters (a record is in or out); the text query is soft
//! (it scores). Category filters are multi-select with OR semantics: with
//! `justice` and `tax` both on, a record in either category passes.

use crate::scoring::ranking::{sort_ranked, Ranked};
use crate::scoring::{score_fields, ScoringFields, MAX_EDIT_DISTANCE};
use crate::search::utils::parse_query;
use crate::types::{RegionFilter, ServiceRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Filter keys offered out of the box. Each maps to the category of the same name.
pub const DEFAULT_FILTER_KEYS: [&str; 6] = ["unified", "justice", "identity", "travel", "tax", "health"];

/// Active category filter keys and the key → category mapping.
#[derive(Debug, Clone)]
pub struct CategoryFilters {
    active: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
}

impl Default for CategoryFilters {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFilters {
    pub fn new() -> Self {
        let aliases = DEFAULT_FILTER_KEYS
            .iter()
            .map(|k| (k.to_string(), k.to_string()))
            .collect();
        Self {
            active: BTreeSet::new(),
            aliases,
        }
    }

    /// Default mapping plus extra `key → category` entries.
    pub fn with_aliases<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = Self::new();
        for (key, category) in aliases {
            filters
                .aliases
                .insert(canonical_key(key.as_ref()), canonical_key(category.as_ref()));
        }
        filters
    }

    /// Flip a filter key. Returns whether the key is active afterwards.
    /// Blank keys are ignored.
    pub fn toggle(&mut self, key: &str) -> bool {
        let key = canonical_key(key);
        if key.is_empty() {
            return false;
        }
        if self.active.remove(&key) {
            false
        } else {
            self.active.insert(key);
            true
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(&canonical_key(key))
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Category a filter key selects. Unmapped keys select the category of
    /// the same name.
    pub fn category_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).map_or(key, String::as_str)
    }

    /// Does a record with this category pass? Always true with no filters on.
    pub fn matches(&self, category: &str) -> bool {
        self.active.is_empty() || self.active.iter().any(|k| self.category_for(k) == category)
    }
}

fn canonical_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Everything the user controls: query text and facet selections.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub query: String,
    pub region: RegionFilter,
    pub filters: CategoryFilters,
}

impl QueryState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        parse_query(&self.query)
    }
}

/// Filter, score, and sort `records`, keeping scores.
///
/// 1. Region facet (skipped for `RegionFilter::All`)
/// 2. Category facet (skipped with no active filters)
/// 3. Score against the query tokens; with tokens, drop score 0
/// 4. Stable sort: score descending, then name
pub fn rank<'a>(records: &'a [ServiceRecord], state: &QueryState, max_distance: usize) -> Vec<Ranked<'a>> {
    let tokens = state.tokens();

    let mut ranked: Vec<Ranked<'a>> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| state.region.matches(r.region))
        .filter(|(_, r)| state.filters.matches(&r.category))
        .filter_map(|(index, record)| {
            let score = score_fields(&ScoringFields::from_record(record), &tokens, max_distance);
            (score > 0).then_some(Ranked { index, record, score })
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked
}

/// The ranked result list for `state`.
///
/// An empty query returns every record that passes the facets, ordered by name.
pub fn search<'a>(records: &'a [ServiceRecord], state: &QueryState) -> Vec<&'a ServiceRecord> {
    rank(records, state, MAX_EDIT_DISTANCE)
        .into_iter()
        .map(|r| r.record)
        .collect()
}
