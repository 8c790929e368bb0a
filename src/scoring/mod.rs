// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The name field dominates: an exact name hit is worth more than the same
//! token found anywhere else in the record. Fuzzy matching only kicks in for a
//! token that found nothing exact, so a typo never outranks a real match.

mod core;
pub mod ranking;

pub use self::core::*;
