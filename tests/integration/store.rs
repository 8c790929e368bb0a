//! Admin store round trips on a temp file.

use onelink_search::{search, NewService, QueryState, ServicePatch, ServiceStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn absher() -> NewService {
    NewService {
        id: "absher".to_string(),
        name_ar: "أبشر".to_string(),
        name_en: Some("Absher".to_string()),
        url: "https://absher.sa".to_string(),
        ..NewService::default()
    }
}

fn najiz() -> NewService {
    NewService {
        id: "najiz".to_string(),
        name_ar: "ناجز".to_string(),
        url: "https://najiz.sa".to_string(),
        category: Some("justice".to_string()),
        ..NewService::default()
    }
}

#[test]
fn test_missing_and_blank_files_are_empty() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));
    assert!(store.list().unwrap().is_empty());

    fs::write(store.path(), "  \n").unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));

    let created = store.create(absher()).unwrap();
    assert_eq!(created.category, "غير مصنفة");
    assert!(created.enabled);
    assert_eq!(created.order, 1);
    assert!(!store.backup_path().exists());

    let second = store.create(najiz()).unwrap();
    assert_eq!(second.order, 2);
    assert!(store.backup_path().exists());

    let updated = store
        .update(
            "absher",
            ServicePatch {
                order: Some(5),
                name_en: Some("Absher Individuals".to_string()),
                ..ServicePatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.order, 5);
    assert_eq!(updated.name_ar, "أبشر");

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["najiz", "absher"]);

    assert!(!store.toggle("najiz").unwrap().enabled);
    assert!(store.toggle("najiz").unwrap().enabled);

    let removed = store.delete("absher").unwrap();
    assert_eq!(removed.id, "absher");
    assert_eq!(store.list().unwrap().len(), 1);

    // The backup holds the state before the delete
    let backup = fs::read_to_string(store.backup_path()).unwrap();
    assert!(backup.contains("absher"));
}

#[test]
fn test_duplicate_rejected() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));
    store.create(absher()).unwrap();
    assert!(matches!(store.create(absher()), Err(StoreError::Duplicate(id)) if id == "absher"));
}

#[test]
fn test_invalid_create_lists_every_problem() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));

    let bad = NewService {
        id: "x".to_string(),
        name_ar: "a".to_string(),
        url: "http://absher.sa".to_string(),
        icon: Some("/img/absher.gif".to_string()),
        order: Some(20_000),
        ..NewService::default()
    };
    match store.create(bad) {
        Err(StoreError::Invalid(errors)) => assert_eq!(errors.len(), 5, "{:?}", errors),
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(!store.path().exists());
}

#[test]
fn test_invalid_update_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));
    store.create(absher()).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let patch = ServicePatch {
        url: Some("javascript:alert(1)".to_string()),
        ..ServicePatch::default()
    };
    assert!(matches!(store.update("absher", patch), Err(StoreError::Invalid(_))));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_unknown_id() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));
    assert!(matches!(store.toggle("ghost"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete("ghost"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.update("ghost", ServicePatch::default()), Err(StoreError::NotFound(_))));
}

#[test]
fn test_store_feeds_search() {
    let dir = TempDir::new().unwrap();
    let store = ServiceStore::open(dir.path().join("services.json"));
    store.create(absher()).unwrap();
    store.create(najiz()).unwrap();
    store.toggle("najiz").unwrap();

    let catalog = store.to_catalog().unwrap();
    assert_eq!(catalog.len(), 1);

    let results = search(catalog.records(), &QueryState::with_query("ابشر"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "absher");
    assert_eq!(results[0].category, "غير مصنفة");
}
