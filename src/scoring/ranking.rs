// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Name** - Arabic-locale collation, see [`compare_names`]
//!
//! Anything still tied keeps catalog order. That relies on the sort being
//! stable (`slice::sort_by` is), not on a final id comparison.

use crate::types::ServiceRecord;
use crate::util::collate::compare_names;
use std::cmp::Ordering;

/// A record with its match score and position in the source slice.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    /// Index into the slice the record was ranked from.
    pub index: usize,
    pub record: &'a ServiceRecord,
    pub score: u32,
}

/// Compare two ranked results. `Less` means `a` is listed first.
pub fn compare_ranked(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| compare_names(&a.record.name, &b.record.name))
}

/// Stable in-place sort by [`compare_ranked`].
pub fn sort_ranked(ranked: &mut [Ranked<'_>]) {
    ranked.sort_by(compare_ranked);
}
