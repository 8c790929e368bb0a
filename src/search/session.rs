// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A caller-owned search session.
//!
//! Holds the immutable catalog, the user's query state, and the current result
//! list. The three mutators (`set_query`, `set_region`,
//! `toggle_category_filter`) each recompute the result list from scratch and
//! hand back a [`SearchOutcome`]. Nothing is global; run as many sessions as
//! you like over clones of the same catalog.
//!
//! # Load state
//!
//! A session starts `Pending` with an empty catalog. Loading either succeeds
//! (`Ready`) or fails (`Failed`). Searching in any state is fine and never
//! errors; the outcome carries the status so a caller can tell "no matches"
//! from "no data".

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::CatalogError;
use crate::search::filter::{rank, CategoryFilters, QueryState};
use crate::search::suggest::{autocomplete_with, did_you_mean_candidates};
use crate::types::{RegionFilter, ServiceRecord};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum CatalogStatus {
    /// Nothing loaded yet.
    Pending,
    Ready,
    /// The load failed; the reason is the error message.
    Failed(String),
}

impl CatalogStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready)
    }
}

/// What a caller renders after every change.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    pub status: &'a CatalogStatus,
    pub results: Vec<&'a ServiceRecord>,
    pub did_you_mean: Vec<&'a ServiceRecord>,
}

impl SearchOutcome<'_> {
    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// True when the catalog is missing, as opposed to a query with no hits.
    pub fn is_unavailable(&self) -> bool {
        !self.status.is_ready()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SearchConfig,
    catalog: Catalog,
    status: CatalogStatus,
    state: QueryState,
    /// Indices into `catalog.records()`, in result order.
    filtered: Vec<usize>,
}

impl Session {
    pub fn new(config: SearchConfig) -> Self {
        let state = QueryState {
            filters: CategoryFilters::with_aliases(&config.category_aliases),
            ..QueryState::default()
        };
        Self {
            config,
            catalog: Catalog::default(),
            status: CatalogStatus::Pending,
            state,
            filtered: Vec::new(),
        }
    }

    /// Session over an already-loaded catalog.
    pub fn with_catalog(config: SearchConfig, catalog: Catalog) -> Self {
        let mut session = Self::new(config);
        session.load(Ok(catalog));
        session
    }

    /// Install the result of a catalog load. On failure the catalog is empty
    /// and the status carries the reason.
    pub fn load(&mut self, result: Result<Catalog, CatalogError>) -> SearchOutcome<'_> {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
            }
            Err(err) => {
                warn!(error = %err, "catalog unavailable");
                self.catalog = Catalog::default();
                self.status = CatalogStatus::Failed(err.to_string());
            }
        }
        self.recompute();
        self.outcome()
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> SearchOutcome<'_> {
        self.load(Catalog::load(path))
    }

    pub fn load_str(&mut self, raw: &str) -> SearchOutcome<'_> {
        self.load(Catalog::from_json_str(raw))
    }

    pub fn set_query(&mut self, query: &str) -> SearchOutcome<'_> {
        self.state.query = query.to_string();
        self.recompute();
        self.outcome()
    }

    /// `"all"` clears the region facet; see [`RegionFilter::parse`].
    pub fn set_region(&mut self, region: &str) -> SearchOutcome<'_> {
        self.set_region_filter(RegionFilter::parse(region))
    }

    pub fn set_region_filter(&mut self, region: RegionFilter) -> SearchOutcome<'_> {
        self.state.region = region;
        self.recompute();
        self.outcome()
    }

    pub fn toggle_category_filter(&mut self, key: &str) -> SearchOutcome<'_> {
        self.state.filters.toggle(key);
        self.recompute();
        self.outcome()
    }

    pub fn clear_filters(&mut self) -> SearchOutcome<'_> {
        self.state.filters.clear();
        self.recompute();
        self.outcome()
    }

    /// Current results plus did-you-mean for the current query.
    pub fn outcome(&self) -> SearchOutcome<'_> {
        let records = self.catalog.records();
        let did_you_mean = did_you_mean_candidates(records, &self.state.tokens(), self.config.max_edit_distance)
            .into_iter()
            .take(self.config.did_you_mean_limit)
            .map(|s| s.record)
            .collect();

        SearchOutcome {
            status: &self.status,
            results: self.filtered().collect(),
            did_you_mean,
        }
    }

    /// Live suggestions: the current result list if it has anything,
    /// otherwise the whole catalog.
    pub fn suggestions(&self) -> Vec<&ServiceRecord> {
        let base: Vec<&ServiceRecord> = if self.filtered.is_empty() {
            self.catalog.records().iter().collect()
        } else {
            self.filtered().collect()
        };
        autocomplete_with(
            &base,
            &self.state.tokens(),
            self.config.autocomplete_limit,
            self.config.max_edit_distance,
        )
    }

    pub fn filtered(&self) -> impl Iterator<Item = &ServiceRecord> + '_ {
        let records = self.catalog.records();
        self.filtered.iter().map(move |&i| &records[i])
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn recompute(&mut self) {
        self.filtered = rank(self.catalog.records(), &self.state, self.config.max_edit_distance)
            .into_iter()
            .map(|r| r.index)
            .collect();
        debug!(
            query = %self.state.query,
            region = %self.state.region,
            results = self.filtered.len(),
            "results recomputed"
        );
    }
}
