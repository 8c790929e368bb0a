// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON-file service store for catalog administration.
//!
//! The whole file is read for every operation and rewritten for every change.
//! That is fine for a catalog of a few hundred entries and keeps the file
//! hand-editable. Before each rewrite the previous file is copied to
//! `<path>.bak`, so one bad edit can always be rolled back.
//!
//! # Validation
//!
//! | Field    | Rule                                                  |
//! |----------|-------------------------------------------------------|
//! | `id`     | 2-40 of `[a-z0-9_-]`, case-insensitive                |
//! | `nameAr` | at least 2 characters after trimming                  |
//! | `url`    | `https://` followed by no spaces                      |
//! | `icon`   | optional; `/icons/<file>.(png|jpg|jpeg|svg|webp)`     |
//! | `order`  | optional; 1..=10000                                   |

use crate::catalog::Catalog;
use crate::error::{CatalogError, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Category given to services created without one ("uncategorized").
pub const UNCATEGORIZED: &str = "غير مصنفة";

const ICON_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "webp"];

/// A service as the admin store persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredService {
    pub id: String,
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub order: u32,
}

fn default_enabled() -> bool {
    true
}

/// Payload for [`ServiceStore::create`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub id: String,
    pub name_ar: String,
    pub name_en: Option<String>,
    pub category: Option<String>,
    pub url: String,
    pub icon: Option<String>,
    pub enabled: Option<bool>,
    pub order: Option<u32>,
}

/// Partial update for [`ServiceStore::update`]. `None` leaves a field alone;
/// the id can't be changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub enabled: Option<bool>,
    pub order: Option<u32>,
}

/// Check a service against the store rules. Returns every violation, not
/// just the first.
pub fn validate(service: &StoredService) -> Vec<String> {
    let mut errors = Vec::new();

    let id_len = service.id.chars().count();
    let id_ok = (2..=40).contains(&id_len)
        && service
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !id_ok {
        errors.push("id: 2-40 letters, digits, '-' or '_'".to_string());
    }

    if service.name_ar.trim().chars().count() < 2 {
        errors.push("nameAr: missing or too short".to_string());
    }

    let url_ok = service
        .url
        .get(..8)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
        && service.url.len() > 8
        && !service.url.contains(' ');
    if !url_ok {
        errors.push("url: must start with https://".to_string());
    }

    if !service.icon.is_empty() && !icon_path_ok(&service.icon) {
        errors.push("icon: must live under /icons/ with a png, jpg, jpeg, svg or webp extension".to_string());
    }

    if service.order != 0 && !(1..=10_000).contains(&service.order) {
        errors.push("order: integer from 1 to 10000".to_string());
    }

    errors
}

fn icon_path_ok(icon: &str) -> bool {
    let Some(file) = icon.strip_prefix("/icons/") else {
        return false;
    };
    if file.contains(' ') {
        return false;
    }
    match file.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && ICON_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Handle on a store file. Cheap; holds only the path.
#[derive(Debug, Clone)]
pub struct ServiceStore {
    path: PathBuf,
}

impl ServiceStore {
    /// The file need not exist yet; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// All services, sorted by `order` (stable for equal orders).
    pub fn list(&self) -> Result<Vec<StoredService>, StoreError> {
        let mut services = self.read()?;
        services.sort_by_key(|s| s.order);
        Ok(services)
    }

    pub fn get(&self, id: &str) -> Result<StoredService, StoreError> {
        self.read()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn create(&self, new: NewService) -> Result<StoredService, StoreError> {
        let mut services = self.read()?;

        let service = StoredService {
            id: new.id,
            name_ar: new.name_ar,
            name_en: new.name_en.unwrap_or_default(),
            category: new
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            url: new.url,
            icon: new.icon.unwrap_or_default(),
            enabled: new.enabled.unwrap_or(true),
            order: new.order.unwrap_or(services.len() as u32 + 1),
        };

        let errors = validate(&service);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }
        if services.iter().any(|s| s.id == service.id) {
            return Err(StoreError::Duplicate(service.id));
        }

        services.push(service.clone());
        self.write(&services)?;
        info!(id = %service.id, url = %service.url, "service added");
        Ok(service)
    }

    pub fn update(&self, id: &str, patch: ServicePatch) -> Result<StoredService, StoreError> {
        let mut services = self.read()?;
        let idx = position(&services, id)?;

        let mut merged = services[idx].clone();
        if let Some(v) = patch.name_ar {
            merged.name_ar = v;
        }
        if let Some(v) = patch.name_en {
            merged.name_en = v;
        }
        if let Some(v) = patch.category {
            merged.category = v;
        }
        if let Some(v) = patch.url {
            merged.url = v;
        }
        if let Some(v) = patch.icon {
            merged.icon = v;
        }
        if let Some(v) = patch.enabled {
            merged.enabled = v;
        }
        if let Some(v) = patch.order {
            merged.order = v;
        }

        let errors = validate(&merged);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        services[idx] = merged.clone();
        self.write(&services)?;
        info!(id = %id, "service updated");
        Ok(merged)
    }

    /// Flip `enabled`. Returns the service after the change.
    pub fn toggle(&self, id: &str) -> Result<StoredService, StoreError> {
        let mut services = self.read()?;
        let idx = position(&services, id)?;
        services[idx].enabled = !services[idx].enabled;
        let service = services[idx].clone();
        self.write(&services)?;
        info!(id = %id, enabled = service.enabled, "service toggled");
        Ok(service)
    }

    /// Remove a service. Returns what was removed.
    pub fn delete(&self, id: &str) -> Result<StoredService, StoreError> {
        let mut services = self.read()?;
        let idx = position(&services, id)?;
        let removed = services.remove(idx);
        self.write(&services)?;
        info!(id = %id, "service deleted");
        Ok(removed)
    }

    /// Enabled services as a search catalog.
    pub fn to_catalog(&self) -> Result<Catalog, StoreError> {
        let enabled: Vec<StoredService> = self.list()?.into_iter().filter(|s| s.enabled).collect();
        let value = serde_json::to_value(enabled)?;
        Catalog::from_value(value).map_err(|e| match e {
            CatalogError::Json(err) => StoreError::Json(err),
            other => StoreError::Invalid(vec![other.to_string()]),
        })
    }

    /// Missing or blank file reads as an empty store.
    fn read(&self) -> Result<Vec<StoredService>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, services: &[StoredService]) -> Result<(), StoreError> {
        if self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|source| StoreError::Io { path: backup, source })?;
        }
        let json = serde_json::to_string_pretty(services)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn position(services: &[StoredService], id: &str) -> Result<usize, StoreError> {
    services
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}
