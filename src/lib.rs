//! Bilingual (Arabic/English) search over a catalog of government e-service links.
//!
//! A catalog is a few hundred hand-curated records. That is small enough to
//! score every record on every keystroke, so there is no index: each query is
//! normalized, every record is scored field by field, and the survivors are
//! sorted. The interesting parts are Arabic normalization, typo tolerance, and
//! keeping the ordering deterministic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  catalog/    │────▶│   scoring/    │────▶│   search/    │
//! │ (aliases,    │     │ (field weights│     │ (filters,    │
//! │  repair ids) │     │  fuzzy bonus) │     │  suggest,    │
//! └──────────────┘     └───────────────┘     │  session)    │
//!        │                     │             └──────────────┘
//!        ▼                     ▼                     │
//! ┌─────────────────────────────────────────────────────┐
//! │        util/ (normalize, collate) · fuzzy/          │
//! │        (Levenshtein, bounded, per-word minimum)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `store` and `redirect` sit beside the search path: the store is the admin
//! CRUD over the catalog file, the redirect policy vets outbound links.
//!
//! # Usage
//!
//! ```
//! use onelink_search::{search, Catalog, QueryState};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"id": "a1", "name": "Absher", "region": "sa", "category": "unified"}]"#,
//! ).unwrap();
//!
//! let results = search(catalog.records(), &QueryState::with_query("abshr"));
//! assert_eq!(results[0].id, "a1");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod redirect;
pub mod scoring;
pub mod search;
pub mod store;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use catalog::{Catalog, CatalogStats};
pub use config::SearchConfig;
pub use error::{CatalogError, ConfigError, RedirectError, StoreError};
pub use fuzzy::{levenshtein, levenshtein_bounded, levenshtein_within, min_word_distance};
pub use redirect::RedirectPolicy;
pub use scoring::ranking::{sort_ranked, Ranked};
pub use scoring::{score, MAX_EDIT_DISTANCE, NEUTRAL_SCORE};
pub use search::{
    autocomplete, did_you_mean, parse_query, rank, search, CatalogStatus, CategoryFilters, QueryState,
    SearchOutcome, Session, Suggestion,
};
pub use store::{NewService, ServicePatch, ServiceStore, StoredService};
pub use types::{Region, RegionFilter, ServiceRecord, Status};
pub use util::collate::compare_names;
pub use util::normalize::normalize;
