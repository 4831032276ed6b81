// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: raw Levenshtein distance over characters, and a
//! normalized similarity in `[0, 1]` built on top of it. Both come in an
//! unbounded form (the contract) and a bounded form (the fast path the
//! scorer actually calls).

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
