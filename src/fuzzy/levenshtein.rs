// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! Everything counts Unicode scalar values, so one Arabic letter is one edit.

use crate::util::normalize::words;

/// Classic Levenshtein distance: insertion, deletion, substitution, unit cost each.
///
/// `levenshtein("", x)` is the character count of `x`. Symmetric.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// Edit distance if it is at most `max`, `None` otherwise.
///
/// Two early exits:
/// 1. Length difference exceeds `max`
/// 2. Every cell in a DP row exceeds `max` (the final cell can only be larger)
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}

/// Smallest edit distance between `token` and any single word of `field`,
/// if that distance is at most `max`.
///
/// `field` is expected to be normalized already. Returns `None` for an empty
/// field or token; an empty token is never a fuzzy query.
pub fn min_word_distance(field: &str, token: &str, max: usize) -> Option<usize> {
    if token.is_empty() {
        return None;
    }

    let mut best: Option<usize> = None;
    for word in words(field) {
        // Only a strictly closer word can improve on `best`
        let limit = best.map_or(max, |b| b.saturating_sub(1));
        if let Some(d) = levenshtein_bounded(word, token, limit) {
            best = Some(d);
            if d == 0 {
                break;
            }
        }
    }
    best
}
