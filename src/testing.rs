//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Region, ServiceRecord, Status};
use crate::util::normalize::{dense, normalize};

/// Create a simple live record. The url is derived from the name
/// (`"Digital Egypt"` → `https://digitalegypt.example`).
pub fn make_record(id: &str, name: &str, region: Region, category: &str) -> ServiceRecord {
    ServiceRecord {
        id: id.to_string(),
        name: name.to_string(),
        subtitle: String::new(),
        description: String::new(),
        url: Some(format!("https://{}.example", dense(&normalize(name)))),
        region,
        category: category.to_string(),
        status: Status::Ok,
        tags: vec![],
    }
}

/// Create a record with no link, as the catalog marks upcoming services.
pub fn make_soon_record(id: &str, name: &str, region: Region, category: &str) -> ServiceRecord {
    ServiceRecord {
        url: None,
        status: Status::Soon,
        ..make_record(id, name, region, category)
    }
}

/// A small mixed Arabic/Latin catalog covering every region.
pub fn sample_catalog_json() -> &'static str {
    r#"[
        {"id": "a1", "name": "Absher", "subtitle": "Ministry of Interior", "region": "sa", "category": "unified", "url": "https://absher.sa"},
        {"id": "a2", "name_ar": "ناجز", "name": "Najiz", "subtitle": "وزارة العدل", "region": "sa", "category": "justice", "url": "https://najiz.sa"},
        {"id": "a3", "name": "Tawakkalna", "region": "sa", "category": "health", "url": "https://tawakkalna.sdaia.gov.sa", "tags": ["covid", "permits"]},
        {"id": "a4", "name": "Nafath", "region": "sa", "category": "identity", "status": "soon"},
        {"id": "e1", "name": "Digital Egypt", "region": "eg", "category": "unified", "url": "https://digital.gov.eg"},
        {"id": "e2", "name": "Egyptian Tax Authority", "region": "eg", "category": "tax", "url": "https://eta.gov.eg"},
        {"id": "c1", "name": "Gov.cn", "region": "cn", "category": "unified", "url": "https://www.gov.cn"},
        {"id": "g1", "name": "Passport Index", "region": "global", "category": "travel", "url": "https://www.passportindex.org", "status": "risk"}
    ]"#
}
