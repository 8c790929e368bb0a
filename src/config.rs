// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Read from a JSON file; every field has a default, so `{}` is a valid
//! config and reproduces the stock behavior exactly.
//!
//! ```json
//! {
//!   "maxEditDistance": 2,
//!   "didYouMeanLimit": 3,
//!   "autocompleteLimit": 8,
//!   "categoryAliases": { "courts": "justice" },
//!   "allowedRedirectDomains": ["absher.sa", "gov.sa"]
//! }
//! ```

use crate::error::ConfigError;
use crate::scoring::MAX_EDIT_DISTANCE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Largest `maxEditDistance` a config may ask for. Past this every short
/// word is within reach of every other.
pub const MAX_CONFIG_EDIT_DISTANCE: usize = 8;

/// Default did-you-mean list length.
pub const DEFAULT_DID_YOU_MEAN_LIMIT: usize = 3;

/// Default autocomplete list length.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 8;

/// Domains the redirect check trusts out of the box.
pub const DEFAULT_REDIRECT_DOMAINS: [&str; 5] = [
    "absher.sa",
    "my.gov.sa",
    "najiz.sa",
    "tawakkalna.sdaia.gov.sa",
    "gov.sa",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Edit distance tolerated by the fuzzy fallback and did-you-mean.
    pub max_edit_distance: usize,
    pub did_you_mean_limit: usize,
    pub autocomplete_limit: usize,
    /// Extra filter keys, mapped to the category they select.
    pub category_aliases: BTreeMap<String, String>,
    pub allowed_redirect_domains: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: MAX_EDIT_DISTANCE,
            did_you_mean_limit: DEFAULT_DID_YOU_MEAN_LIMIT,
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            category_aliases: BTreeMap::new(),
            allowed_redirect_domains: DEFAULT_REDIRECT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_edit_distance > MAX_CONFIG_EDIT_DISTANCE {
            return Err(ConfigError::OutOfRange {
                field: "maxEditDistance",
                value: self.max_edit_distance,
                max: MAX_CONFIG_EDIT_DISTANCE,
            });
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
