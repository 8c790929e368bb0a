// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.

use crate::util::normalize::normalize;

/// Parse a query string into normalized, whitespace-separated terms.
///
/// Never yields an empty token, so an all-punctuation query is the same as
/// no query at all.
///
/// # Example
///
/// ```
/// use onelink_search::parse_query;
///
/// assert_eq!(parse_query("  Digital   EGYPT "), vec!["digital", "egypt"]);
/// assert!(parse_query("?!").is_empty());
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}
