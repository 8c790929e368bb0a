// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for search.
//!
//! Users type Arabic with and without harakat, with whichever alef their
//! keyboard gives them, and with taa marbuta or haa interchangeably. Latin
//! input arrives in any case with punctuation mixed in. Everything that gets
//! compared (queries, names, descriptions, urls) goes through [`normalize`]
//! first, so matching only ever sees one spelling.
//!
//! # Algorithm (with unicode-normalization feature)
//!
//! 1. Lowercase
//! 2. NFD decompose and drop combining marks (harakat, Latin accents)
//! 3. Unify letter variants: `أ إ آ ٱ` → `ا`, `ى` → `ي`, `ة` → `ه`
//! 4. Every run of non-word characters becomes one space, ends trimmed
//!
//! The output contains only word characters and single inner spaces, which
//! is what makes the function idempotent.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for comparison.
///
/// - "Absher  Business!" → "absher business"
/// - "أَبْشِر" → "ابشر"
/// - "وزارة الصحة" → "وزاره الصحه"
///
/// Never fails; empty input gives an empty string.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in base_chars(&lowered).map(unify_letter) {
        if is_word_char(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Normalized text with all whitespace removed.
///
/// Lets "digitalegypt" match a field stored as "Digital Egypt".
pub fn dense(normalized: &str) -> String {
    normalized.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whitespace-delimited words, never empty.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

#[cfg(feature = "unicode-normalization")]
fn base_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().filter(|c| !is_combining_mark(*c))
}

/// Without decomposition tables, drop the mark ranges that matter here.
/// Precomposed Latin accents survive; precomposed alef forms are still
/// handled by [`unify_letter`].
#[cfg(not(feature = "unicode-normalization"))]
fn base_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().filter(|c| !is_combining_mark(*c))
}

#[cfg(not(feature = "unicode-normalization"))]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{064B}'..='\u{065F}' |  // Arabic harakat
        '\u{0670}' |               // Superscript alef
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

fn unify_letter(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        'ى' => 'ي',
        'ة' => 'ه',
        _ => c,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
