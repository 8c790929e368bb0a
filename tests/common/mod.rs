//! Shared test utilities and fixtures.

#![allow(dead_code)]

use onelink_search::{Catalog, ServiceRecord};
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from onelink_search::testing
pub use onelink_search::testing::{make_record, make_soon_record, sample_catalog_json};

// ============================================================================
// CATALOGS
// ============================================================================

/// The eight-record mixed catalog from `onelink_search::testing`.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(sample_catalog_json()).expect("sample catalog parses")
}

/// The two-record catalog used in the reference scenario.
pub const SCENARIO_JSON: &str = r#"[
    {"id": "a1", "name": "Absher", "region": "sa", "category": "unified", "url": "https://absher.sa"},
    {"id": "e1", "name": "Digital Egypt", "region": "eg", "category": "unified", "url": "https://digital.gov.eg"}
]"#;

pub fn scenario_catalog() -> Catalog {
    Catalog::from_json_str(SCENARIO_JSON).expect("scenario catalog parses")
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Ids of a result list, in order.
pub fn ids<'a>(results: &[&'a ServiceRecord]) -> Vec<&'a str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// FILESYSTEM
// ============================================================================

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
