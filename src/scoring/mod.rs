// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how records get their numbers.
//!
//! Every record is scored independently against the query - a pure function
//! of (query, record, weights) with no corpus-wide statistics. Exact
//! substring hits earn the full field weight; fuzzy near-misses earn a
//! discounted share. The final score is normalized into `[0, 1]` by the best
//! score the query could possibly have earned.

mod relevance;
mod weights;

pub use relevance::*;
pub use weights::*;
