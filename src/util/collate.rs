// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name collation for ranking tie-breaks.
//!
//! Approximates an Arabic-locale collation without pulling in ICU:
//!
//! | Level     | Rule                                                         |
//! |-----------|--------------------------------------------------------------|
//! | Primary   | normalized text; digits < Arabic letters < Latin and others   |
//! | Tertiary  | lowercase before uppercase                                    |
//!
//! Arabic letters compare in alphabetical order because the Arabic block is
//! laid out alphabetically (ا ب ت … ن ه و ي). Names that are equal at every
//! level compare `Equal`, so a stable sort keeps them in input order.

use super::normalize::normalize;
use std::cmp::Ordering;

/// Compare two display names the way the result list orders ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let na = normalize(a);
    let nb = normalize(b);

    primary_key(&na)
        .cmp(primary_key(&nb))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
}

/// Script class of a normalized character.
fn script_rank(c: char) -> u8 {
    if c == ' ' {
        0
    } else if c.is_numeric() {
        1
    } else if ('\u{0600}'..='\u{06FF}').contains(&c) {
        2
    } else {
        3
    }
}

fn primary_key(normalized: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    normalized.chars().map(|c| (script_rank(c), c))
}

fn tertiary_key(raw: &str) -> impl Iterator<Item = u8> + '_ {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| u8::from(c.is_uppercase()))
}
