// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Safe-redirect policy.
//!
//! Before a result link is opened, its host is checked against an allowlist.
//! A host passes when it equals an allowed domain or is a subdomain of one.
//! Matching is on label boundaries: `evilabsher.sa` does not pass for
//! `absher.sa`.

use crate::error::RedirectError;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPolicy {
    domains: Vec<String>,
}

impl RedirectPolicy {
    /// Domains are lowercased; leading dots and blanks are dropped.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn allows_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_lowercase();
        self.domains.iter().any(|d| {
            host == *d
                || host
                    .strip_suffix(d.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }

    /// Vet a redirect target. Returns the URL to follow.
    pub fn check(&self, raw: &str) -> Result<String, RedirectError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RedirectError::Missing);
        }

        let url = Url::parse(raw).map_err(|e| RedirectError::Invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RedirectError::Invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        let host = url
            .host_str()
            .ok_or_else(|| RedirectError::Invalid("URL has no host".to_string()))?;

        if !self.allows_host(host) {
            warn!(url = %raw, host = %host, "blocked redirect");
            return Err(RedirectError::Blocked(host.to_string()));
        }

        debug!(url = %raw, "allowed redirect");
        Ok(url.to_string())
    }
}
