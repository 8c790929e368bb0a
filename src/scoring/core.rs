// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scores.
//!
//! Each query token is scored against every field independently and the
//! per-token scores are summed. A field contributes up to three bonuses:
//!
//! | Field       | Contains | Prefix | Equals | Fuzzy |
//! |-------------|----------|--------|--------|-------|
//! | name        | 8        | 6      | 10     | 4     |
//! | subtitle    | 4        | 3      | 5      | 2     |
//! | description | 2        | 2      | 3      | 1     |
//! | url         | 2        | 1      | 3      | 1     |
//! | tags        | 2        | 2      | 3      | 1     |
//!
//! Every test runs against the normalized field and its dense (space-free)
//! form, so "digitalegypt" still hits "Digital Egypt".
//!
//! # Fuzzy fallback
//!
//! Only when a token scores 0 across all fields. For each field, take the
//! closest word by edit distance `d`; if `d <= MAX_EDIT_DISTANCE` the field adds
//! `fuzzy * (MAX_EDIT_DISTANCE - d + 1)`, so closer always scores higher. In
//! practice `d >= 1` here; a word at distance 0 would have matched exactly.
//!
//! These weights are hand-tuned. Tests assert relative order, not the numbers.

use crate::fuzzy::min_word_distance;
use crate::types::ServiceRecord;
use crate::util::normalize::{dense, normalize};

/// Maximum edit distance accepted by the fuzzy fallback and did-you-mean.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Score every record gets when there is no query.
pub const NEUTRAL_SCORE: u32 = 1;

/// Bonuses a field awards for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
    /// Token appears anywhere in the field.
    pub contains: u32,
    /// Field starts with the token.
    pub prefix: u32,
    /// Field equals the token.
    pub exact: u32,
    /// Multiplier for the fuzzy fallback.
    pub fuzzy: u32,
}

pub const NAME_WEIGHTS: FieldWeights = FieldWeights { contains: 8, prefix: 6, exact: 10, fuzzy: 4 };
pub const SUBTITLE_WEIGHTS: FieldWeights = FieldWeights { contains: 4, prefix: 3, exact: 5, fuzzy: 2 };
pub const DESCRIPTION_WEIGHTS: FieldWeights = FieldWeights { contains: 2, prefix: 2, exact: 3, fuzzy: 1 };
pub const URL_WEIGHTS: FieldWeights = FieldWeights { contains: 2, prefix: 1, exact: 3, fuzzy: 1 };
pub const TAGS_WEIGHTS: FieldWeights = DESCRIPTION_WEIGHTS;

/// One field in both comparison forms.
#[derive(Debug, Clone, Default)]
pub struct FieldText {
    pub normalized: String,
    pub dense: String,
}

impl FieldText {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let dense = dense(&normalized);
        Self { normalized, dense }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Precomputed comparison forms of a record's searchable fields.
///
/// Building this once per record per search keeps normalization out of the
/// per-token loop.
#[derive(Debug, Clone)]
pub struct ScoringFields {
    pub name: FieldText,
    pub subtitle: FieldText,
    pub description: FieldText,
    pub url: FieldText,
    pub tags: FieldText,
}

impl ScoringFields {
    pub fn from_record(record: &ServiceRecord) -> Self {
        Self {
            name: FieldText::new(&record.name),
            subtitle: FieldText::new(&record.subtitle),
            description: FieldText::new(&record.description),
            url: FieldText::new(record.url_str()),
            tags: FieldText::new(&record.tags.join(" ")),
        }
    }

    /// Fields in descending weight order.
    fn weighted(&self) -> [(&FieldText, FieldWeights); 5] {
        [
            (&self.name, NAME_WEIGHTS),
            (&self.subtitle, SUBTITLE_WEIGHTS),
            (&self.description, DESCRIPTION_WEIGHTS),
            (&self.url, URL_WEIGHTS),
            (&self.tags, TAGS_WEIGHTS),
        ]
    }
}

/// Exact-match bonuses of one field for one token.
pub fn exact_field_score(field: &FieldText, token: &str, weights: FieldWeights) -> u32 {
    if field.is_empty() {
        return 0;
    }

    let mut score = 0;
    if field.normalized.contains(token) || field.dense.contains(token) {
        score += weights.contains;
    }
    if field.normalized.starts_with(token) || field.dense.starts_with(token) {
        score += weights.prefix;
    }
    if field.normalized == token || field.dense == token {
        score += weights.exact;
    }
    score
}

/// Fuzzy bonus of one field for one token: `fuzzy * (max - d + 1)` for the
/// closest word at distance `d <= max`, else 0.
pub fn fuzzy_field_score(field: &FieldText, token: &str, weights: FieldWeights, max_distance: usize) -> u32 {
    min_word_distance(&field.normalized, token, max_distance).map_or(0, |d| {
        let closeness = u32::try_from(max_distance - d).unwrap_or(u32::MAX).saturating_add(1);
        weights.fuzzy.saturating_mul(closeness)
    })
}

/// Score precomputed fields against query tokens.
///
/// Empty `tokens` is "no query" and scores [`NEUTRAL_SCORE`]. Empty strings
/// inside `tokens` are skipped and never reach the fuzzy path.
pub fn score_fields(fields: &ScoringFields, tokens: &[String], max_distance: usize) -> u32 {
    if tokens.is_empty() {
        return NEUTRAL_SCORE;
    }

    let weighted = fields.weighted();
    let mut total: u32 = 0;

    for token in tokens.iter().filter(|t| !t.is_empty()) {
        let mut token_score: u32 = weighted
            .iter()
            .map(|(field, w)| exact_field_score(field, token, *w))
            .sum();

        if token_score == 0 {
            token_score = weighted
                .iter()
                .fold(0u32, |acc, (field, w)| {
                    acc.saturating_add(fuzzy_field_score(field, token, *w, max_distance))
                });
        }

        total = total.saturating_add(token_score);
    }

    total
}

/// Relevance of `record` for already-normalized query tokens.
pub fn score(record: &ServiceRecord, tokens: &[String]) -> u32 {
    score_fields(&ScoringFields::from_record(record), tokens, MAX_EDIT_DISTANCE)
}
