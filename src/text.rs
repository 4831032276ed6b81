// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the single front door for all comparisons.
//!
//! Queries and record fields pass through `normalize` before anything is
//! compared, so "Café-Déployment!" and "cafe deployment" land on the same
//! string. Scoring never sees raw text.
//!
//! # Algorithm
//!
//! 1. Lowercase
//! 2. NFD normalize (decompose characters into base + combining marks)
//! 3. Drop the combining marks: "café" → "cafe", "naïve" → "naive"
//! 4. Replace anything that is neither alphanumeric nor whitespace with a space
//! 5. Collapse whitespace runs and trim
//!
//! The output is idempotent: normalizing twice gives the same string. That
//! property is what lets the scorer treat normalized fields as canonical.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, flatten
/// punctuation to spaces, and collapse whitespace.
///
/// - "Café-API!" → "cafe api"
/// - "  How   to  " → "how to"
/// - "???" → ""
///
/// Lowercasing happens before decomposition so characters whose lowercase
/// form carries a combining mark (e.g. 'İ' → "i" + U+0307) still come out
/// clean.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a query into normalized search terms.
///
/// Empty and whitespace-only queries produce no terms.
pub fn query_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
