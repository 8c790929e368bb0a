// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over the loaded catalog.
//!
//! # Pipeline
//!
//! ```text
//! query ──▶ parse_query ──▶ tokens
//!                             │
//! records ──▶ region facet ──▶ category facet ──▶ score ──▶ sort ──▶ results
//!                                                  │
//!                             did_you_mean ◀───────┤
//!                             autocomplete ◀───────┘
//! ```
//!
//! Every function here is pure: same catalog and query in, same list out.
//! [`Session`] is the only stateful piece, and it just remembers the query
//! state and the last result list.

pub mod filter;
pub mod session;
pub mod suggest;
pub mod utils;

pub use filter::{rank, search, CategoryFilters, QueryState, DEFAULT_FILTER_KEYS};
pub use session::{CatalogStatus, SearchOutcome, Session};
pub use suggest::{autocomplete, did_you_mean, did_you_mean_candidates, Suggestion};
pub use utils::parse_query;
