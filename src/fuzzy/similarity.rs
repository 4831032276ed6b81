// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized string similarity on top of edit distance.

use crate::fuzzy::{distance, distance_within};

/// Similarity between two strings in `[0, 1]`.
///
/// - Equal strings (including two empties) → 1.0
/// - Exactly one empty string → 0.0
/// - Otherwise `1 - distance / max(char_len(a), char_len(b))`
///
/// One typo in a three-letter word costs a third of the score; the same typo
/// in a ten-letter word costs a tenth.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - distance(a, b) as f64 / max_len as f64
}

/// Similarity, if it reaches `min`.
///
/// Converts the similarity floor into an edit budget
/// (`floor((1 - min) · max_len)`) and runs the bounded DP, so candidates that
/// cannot reach the floor never pay for a full distance computation. Agrees
/// exactly with [`similarity`]: returns `Some(s)` iff `similarity(a, b) == s`
/// and `s >= min`.
pub fn similarity_within(a: &str, b: &str, min: f64) -> Option<f64> {
    if a == b {
        return (1.0 >= min).then_some(1.0);
    }
    if a.is_empty() || b.is_empty() {
        return (0.0 >= min).then_some(0.0);
    }
    let max_len = a.chars().count().max(b.chars().count());
    let budget = ((1.0 - min) * max_len as f64).floor() as usize;
    let dist = distance_within(a, b, budget)?;
    let sim = 1.0 - dist as f64 / max_len as f64;
    (sim >= min).then_some(sim)
}
