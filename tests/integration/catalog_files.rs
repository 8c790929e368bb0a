//! Loading catalogs and config from disk.

use super::common::{ids, sample_catalog_json, write_file};
use onelink_search::{search, Catalog, CatalogError, CatalogStatus, QueryState, Region, SearchConfig, Session};
use tempfile::TempDir;

#[test]
fn test_load_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "services.json", sample_catalog_json());

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 8);
    assert_eq!(ids(&search(catalog.records(), &QueryState::with_query("absher"))), vec!["a1"]);
}

#[test]
fn test_region_grouped_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "grouped.json",
        r#"{
            "sa": [{"nameAr": "أبشر", "nameEn": "Absher", "href": "https://absher.sa"}],
            "eg": [{"title": "Digital Egypt", "type": "Unified"}]
        }"#,
    );

    let catalog = Catalog::load(&path).unwrap();
    let records = catalog.records();
    assert_eq!(records.len(), 2);

    let absher = records.iter().find(|r| r.region == Region::Sa).unwrap();
    assert_eq!(absher.name, "أبشر");
    assert_eq!(absher.url.as_deref(), Some("https://absher.sa"));
    // Generated from region and position
    assert_eq!(absher.id, "sa-1");

    let egypt = records.iter().find(|r| r.region == Region::Eg).unwrap();
    assert_eq!(egypt.category, "unified");
    assert_eq!(egypt.id, "eg-2");
}

#[test]
fn test_grouped_ties_follow_document_order() {
    let catalog = Catalog::from_json_str(r#"{"sa": [{"name": "Portal"}], "eg": [{"name": "Portal"}]}"#).unwrap();
    let results = search(catalog.records(), &QueryState::with_query("portal"));
    assert_eq!(ids(&results), vec!["sa-1", "eg-2"]);
}

#[test]
fn test_broken_file_is_failed_state() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "broken.json", "[{\"id\": ");

    assert!(matches!(Catalog::load(&path), Err(CatalogError::Json(_))));

    let mut session = Session::new(SearchConfig::default());
    let outcome = session.load_path(&path);
    assert!(matches!(outcome.status, CatalogStatus::Failed(_)));
    assert_eq!(outcome.count(), 0);
}

#[test]
fn test_missing_file_is_failed_state() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::new(SearchConfig::default());
    let outcome = session.load_path(dir.path().join("nope.json"));
    assert!(outcome.is_unavailable());
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "config.json",
        r#"{"didYouMeanLimit": 1, "categoryAliases": {"courts": "justice"}}"#,
    );

    let config = SearchConfig::load(&path).unwrap();
    assert_eq!(config.did_you_mean_limit, 1);
    assert_eq!(config.autocomplete_limit, SearchConfig::default().autocomplete_limit);
    assert_eq!(config.category_aliases.get("courts").map(String::as_str), Some("justice"));
}
