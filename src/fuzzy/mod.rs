// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The catalog is tens to hundreds of records, so a straight DP per word is
//! fast enough; the bounded variant just saves work on obvious misses.

mod levenshtein;

pub use levenshtein::*;
