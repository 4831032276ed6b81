// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the budget, skip the O(nm) DP.
//! This catches most non-matches before allocating anything.

/// Levenshtein distance between two strings.
///
/// Unit-cost insertions, deletions, and substitutions; a transposition
/// counts as two edits. Operates on characters, not bytes, so "café" and
/// "cafe" are one edit apart regardless of UTF-8 width.
///
/// Two-row DP: O(len(a) · len(b)) time, O(len(b)) space.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Edit distance, if it does not exceed `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the character-length difference exceeds `max`, return `None` without
///    touching the DP
/// 2. If the minimum value in a DP row exceeds `max`, abandon the DP early
///
/// Both exits are sound: they only fire when the final distance is provably
/// over budget, so `distance_within(a, b, max) == Some(d)` exactly when
/// `distance(a, b) == d && d <= max`.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }
    if a == b {
        return Some(0);
    }
    if a_len == 0 {
        return Some(b_len);
    }
    if b_len == 0 {
        return Some(a_len);
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: row minimum never decreases in later rows
        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}
