// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The service catalog: load once, read many.
//!
//! Three input shapes are accepted:
//!
//! ```text
//! [ {..}, {..} ]                          plain array
//! { "services": [ {..}, {..} ] }          wrapped array
//! { "sa": [ {..} ], "eg": [ {..} ] }      grouped by region (key is the fallback region)
//! ```
//!
//! After construction the catalog is immutable. Its invariants: every id is
//! unique and non-empty, every name is non-blank, every category is lowercase.

pub mod raw;

use crate::error::CatalogError;
use crate::types::{Region, ServiceRecord, Status};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name given to entries without one, so they stay visible and searchable.
pub const PLACEHOLDER_NAME: &str = "خدمة";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, repairing records that would break its invariants.
    ///
    /// Blank ids become `<region>-<position>`, duplicate ids get a numeric
    /// suffix, blank names get [`PLACEHOLDER_NAME`]. Nothing is dropped.
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        let mut services = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, mut record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                record.id = format!("{}-{}", record.region.code(), position + 1);
            }
            if by_id.contains_key(&record.id) {
                let base = record.id.clone();
                let mut n = 2;
                while by_id.contains_key(&format!("{}-{}", base, n)) {
                    n += 1;
                }
                record.id = format!("{}-{}", base, n);
                warn!(id = %base, renamed = %record.id, "duplicate service id");
            }
            if record.name.trim().is_empty() {
                debug!(id = %record.id, "service without a name");
                record.name = PLACEHOLDER_NAME.to_string();
            }
            record.category = record.category.trim().to_lowercase();

            by_id.insert(record.id.clone(), services.len());
            services.push(record);
        }

        Self { services, by_id }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Accepts any of the three supported shapes.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let mut records = Vec::new();

        match value {
            Value::Array(items) => collect_entries(&items, None, &mut records),
            Value::Object(map) => {
                if let Some(Value::Array(items)) = map.get("services") {
                    collect_entries(items, None, &mut records);
                } else {
                    // Groups are read in document order; the map keeps insertion order.
                    let mut groups = 0;
                    for (region, group) in &map {
                        if let Value::Array(items) = group {
                            groups += 1;
                            collect_entries(items, Some(region), &mut records);
                        }
                    }
                    if groups == 0 {
                        return Err(CatalogError::Shape(
                            "object has neither a `services` array nor region arrays".to_string(),
                        ));
                    }
                }
            }
            other => {
                return Err(CatalogError::Shape(format!(
                    "expected an array or object, found {}",
                    json_kind(&other)
                )));
            }
        }

        Ok(Self::new(records))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(path = %path.display(), services = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceRecord> {
        self.by_id.get(id).map(|&i| &self.services[i])
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.services.len(),
            ..CatalogStats::default()
        };
        for record in &self.services {
            if record.is_actionable() {
                stats.actionable += 1;
            }
            *stats.by_region.entry(record.region).or_default() += 1;
            *stats.by_category.entry(record.category.clone()).or_default() += 1;
            *stats.by_status.entry(record.status).or_default() += 1;
        }
        stats
    }
}

/// Counts for `inspect`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    /// Records with a usable link.
    pub actionable: usize,
    pub by_region: BTreeMap<Region, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_status: BTreeMap<Status, usize>,
}

fn collect_entries(items: &[Value], fallback_region: Option<&str>, out: &mut Vec<ServiceRecord>) {
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(map) => out.push(raw::canonicalize(map, fallback_region)),
            other => warn!(
                position = i,
                kind = json_kind(other),
                "skipping catalog entry that is not an object"
            ),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
