// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Did-you-mean and autocomplete.
//!
//! Both reuse the match scorer. Did-you-mean adds an edit-distance gate on the
//! record *name*: the whole normalized query must be within tolerance of a
//! single name word. That keeps suggestions to plausible misspellings of a
//! service, not everything that scores on a description.

use crate::fuzzy::min_word_distance;
use crate::scoring::{score_fields, ScoringFields, MAX_EDIT_DISTANCE};
use crate::search::utils::parse_query;
use crate::types::ServiceRecord;

/// A did-you-mean candidate.
#[derive(Debug, Clone, Copy)]
pub struct Suggestion<'a> {
    pub record: &'a ServiceRecord,
    /// Edit distance from the query to the closest name word.
    pub distance: usize,
    pub score: u32,
}

/// All did-you-mean candidates, best first.
///
/// A record qualifies when some word of its normalized name is within
/// `max_distance` of the joined query tokens and it scores above 0. Order:
/// distance ascending, then score descending, then catalog order.
pub fn did_you_mean_candidates<'a>(
    records: &'a [ServiceRecord],
    tokens: &[String],
    max_distance: usize,
) -> Vec<Suggestion<'a>> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let query = tokens.join(" ");

    let mut candidates: Vec<Suggestion<'a>> = records
        .iter()
        .filter_map(|record| {
            let fields = ScoringFields::from_record(record);
            let distance = min_word_distance(&fields.name.normalized, &query, max_distance)?;
            let score = score_fields(&fields, tokens, max_distance);
            (score > 0).then_some(Suggestion { record, distance, score })
        })
        .collect();

    candidates.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| b.score.cmp(&a.score)));
    candidates
}

/// Up to `limit` "did you mean" records for a raw query.
///
/// Searches the whole catalog, ignoring facets: the point is to find the
/// service the user was trying to name.
pub fn did_you_mean<'a>(records: &'a [ServiceRecord], raw_query: &str, limit: usize) -> Vec<&'a ServiceRecord> {
    did_you_mean_candidates(records, &parse_query(raw_query), MAX_EDIT_DISTANCE)
        .into_iter()
        .take(limit)
        .map(|s| s.record)
        .collect()
}

/// Up to `limit` live suggestions from `base`, by score.
///
/// No edit-distance gate. Ties keep `base` order. No tokens, no suggestions.
pub fn autocomplete<'a>(base: &[&'a ServiceRecord], tokens: &[String], limit: usize) -> Vec<&'a ServiceRecord> {
    autocomplete_with(base, tokens, limit, MAX_EDIT_DISTANCE)
}

pub(crate) fn autocomplete_with<'a>(
    base: &[&'a ServiceRecord],
    tokens: &[String],
    limit: usize,
    max_distance: usize,
) -> Vec<&'a ServiceRecord> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&'a ServiceRecord, u32)> = base
        .iter()
        .filter_map(|&record| {
            let score = score_fields(&ScoringFields::from_record(record), tokens, max_distance);
            (score > 0).then_some((record, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().take(limit).map(|(r, _)| r).collect()
}
