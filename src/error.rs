// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types, one enum per concern.
//!
//! Search itself never fails. Everything that can fail is at the edges:
//! reading a catalog, reading config, touching the store file, vetting a
//! redirect target.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog could not be loaded. Distinct from "loaded, zero matches".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog shape: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} is {value}, above the limit of {max}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid store JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid service: {}", .0.join(" | "))]
    Invalid(Vec<String>),

    #[error("a service with id '{0}' already exists")]
    Duplicate(String),

    #[error("service '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedirectError {
    #[error("missing URL")]
    Missing,

    #[error("invalid URL: {0}")]
    Invalid(String),

    #[error("redirect to untrusted host '{0}' blocked")]
    Blocked(String),
}
