// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering. Every sort here is stable: records that compare equal
//! keep the corpus order the engine handed them in.

use std::cmp::Ordering;

use crate::search::engine::ScoredResult;
use crate::search::options::SortOrder;

/// Sorts a score-filtered result set in place according to `order`.
pub(crate) fn rank(hits: &mut [ScoredResult], order: SortOrder) {
    match order {
        SortOrder::Relevance => {
            hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        }
        SortOrder::Title => {
            hits.sort_by_cached_key(|hit| hit.record.title.to_lowercase());
        }
        SortOrder::Newest => {
            hits.sort_by(|a, b| b.record.timestamp.cmp(&a.record.timestamp));
        }
        SortOrder::Author => {
            // Authorless records carry the higher discriminant, so they
            // land after every named author
            hits.sort_by_cached_key(|hit| match &hit.record.author {
                Some(author) => (0u8, author.to_lowercase()),
                None => (1u8, String::new()),
            });
        }
    }
}
