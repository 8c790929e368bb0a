// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw catalog entries: alias resolution.
//!
//! Catalog JSON has been written by hand, by the admin panel, and by export
//! scripts, and each picked its own field names. Aliases are tried in order and
//! the first non-empty string wins. A value of the wrong type (a number where
//! a name should be) counts as absent, so one bad field degrades that field
//! only, never the record or the catalog.

use crate::types::{Region, ServiceRecord, Status};
use serde_json::{Map, Value};

pub const ID_KEYS: &[&str] = &["id", "key", "slug"];
pub const NAME_KEYS: &[&str] = &["name_ar", "nameAr", "name", "title", "nameEn"];
pub const SUBTITLE_KEYS: &[&str] = &["subtitle", "subtitle_ar", "owner"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "description_ar", "desc"];
pub const URL_KEYS: &[&str] = &["url", "href"];
pub const REGION_KEYS: &[&str] = &["region", "country"];
pub const CATEGORY_KEYS: &[&str] = &["category", "type"];

/// Category given to entries that don't name one.
pub const DEFAULT_CATEGORY: &str = "other";

/// First alias holding a non-blank string.
fn first_str(raw: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| raw.get(*k))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids may be numeric in hand-written catalogs.
fn first_id(raw: &Map<String, Value>) -> String {
    ID_KEYS
        .iter()
        .filter_map(|k| raw.get(*k))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Tags as an array of strings, or one comma-separated string.
fn tags(raw: &Map<String, Value>) -> Vec<String> {
    match raw.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Build a record from one raw JSON object.
///
/// `fallback_region` is the enclosing key when the catalog is grouped by
/// region. The id may come back empty and the name may be blank; the
/// [`Catalog`](super::Catalog) constructor fills both in.
pub fn canonicalize(raw: &Map<String, Value>, fallback_region: Option<&str>) -> ServiceRecord {
    let region = first_str(raw, REGION_KEYS)
        .as_deref()
        .or(fallback_region)
        .map_or(Region::Global, Region::parse);

    ServiceRecord {
        id: first_id(raw),
        name: first_str(raw, NAME_KEYS).unwrap_or_default(),
        subtitle: first_str(raw, SUBTITLE_KEYS).unwrap_or_default(),
        description: first_str(raw, DESCRIPTION_KEYS).unwrap_or_default(),
        url: first_str(raw, URL_KEYS),
        region,
        category: first_str(raw, CATEGORY_KEYS)
            .map_or_else(|| DEFAULT_CATEGORY.to_string(), |c| c.to_lowercase()),
        status: first_str(raw, &["status"]).map_or(Status::Ok, |s| Status::parse(&s)),
        tags: tags(raw),
    }
}
