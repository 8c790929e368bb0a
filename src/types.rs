// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for the service catalog.
//!
//! Everything downstream of the loader works with these canonical shapes. The
//! raw JSON is messy (half a dozen aliases per field, regions as country names
//! or codes, statuses in any case); by the time a `ServiceRecord` exists, all of
//! that has been resolved. Region and category are lowercased here so every
//! comparison in the filter pipeline is a plain equality check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Region a service belongs to.
///
/// A closed set. Unknown values collapse to `Global` rather than failing, so a
/// typo in one catalog entry cannot make it disappear from an unfiltered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Sa,
    Eg,
    Cn,
    Global,
}

impl Region {
    /// Every region, in display order.
    pub const ALL: [Region; 4] = [Region::Sa, Region::Eg, Region::Cn, Region::Global];

    /// Lenient parse: trims, ignores case, and maps anything unrecognized to `Global`.
    pub fn parse(value: &str) -> Region {
        Region::from_code(value).unwrap_or(Region::Global)
    }

    /// Strict parse of a region code (trimmed, case-insensitive).
    pub fn from_code(value: &str) -> Option<Region> {
        match value.trim().to_lowercase().as_str() {
            "sa" => Some(Region::Sa),
            "eg" => Some(Region::Eg),
            "cn" => Some(Region::Cn),
            "global" => Some(Region::Global),
            _ => None,
        }
    }

    /// The lowercase code used in catalogs and filters.
    pub fn code(self) -> &'static str {
        match self {
            Region::Sa => "sa",
            Region::Eg => "eg",
            Region::Cn => "cn",
            Region::Global => "global",
        }
    }

    /// Human-readable label shown next to results.
    pub fn label(self) -> &'static str {
        match self {
            Region::Sa => "Saudi · 🇸🇦",
            Region::Eg => "Egypt · 🇪🇬",
            Region::Cn => "China · 🇨🇳",
            Region::Global => "Global · 🌍",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Availability of a service link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Live and usable (`ok` or `live` in source data).
    Ok,
    /// Announced but not yet available.
    Soon,
    /// Deprecated or known to be unreliable.
    Risk,
}

impl Status {
    /// Lenient parse. Unknown or empty values are treated as `Ok`.
    pub fn parse(value: &str) -> Status {
        match value.trim().to_lowercase().as_str() {
            "soon" => Status::Soon,
            "risk" => Status::Risk,
            _ => Status::Ok,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Soon => "soon",
            Status::Risk => "risk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "Ready",
            Status::Soon => "Soon",
            Status::Risk => "Deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A canonical catalog entry.
///
/// Produced by the catalog loader and never mutated afterwards. `id` is unique
/// within a loaded catalog; the loader enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Target link. `None` marks a "coming soon" entry.
    #[serde(default)]
    pub url: Option<String>,
    pub region: Region,
    /// Always lowercase.
    pub category: String,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ServiceRecord {
    /// Can this record be opened? False for missing, empty, or placeholder (`#`) links.
    pub fn is_actionable(&self) -> bool {
        match self.url.as_deref().map(str::trim) {
            None | Some("") | Some("#") => false,
            Some(_) => true,
        }
    }

    /// The url as a plain string, empty when absent.
    pub fn url_str(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// Region facet selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
    /// A code outside the known set. Matches nothing.
    Unknown,
}

impl RegionFilter {
    /// `"all"` (or empty) selects everything. Other values are compared as
    /// exact codes, so a mistyped code selects nothing instead of silently
    /// landing on `Global`.
    pub fn parse(value: &str) -> RegionFilter {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return RegionFilter::All;
        }
        Region::from_code(value).map_or(RegionFilter::Unknown, RegionFilter::Only)
    }

    pub fn matches(self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(r) => r == region,
            RegionFilter::Unknown => false,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("all"),
            RegionFilter::Only(r) => write!(f, "{}", r),
            RegionFilter::Unknown => f.write_str("unknown"),
        }
    }
}
