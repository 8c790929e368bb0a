// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by scoring, ranking, and the loader.
//!
//! Normalization for Arabic/Latin-insensitive matching, and the name collation
//! the ranker falls back to when scores tie.

pub mod collate;
pub mod normalize;
