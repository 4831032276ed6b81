// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: score, filter, rank, truncate.
//!
//! The engine holds a [`RelevanceScorer`] and borrows the corpus per call,
//! so one engine serves any number of corpora and threads. Per-record
//! scoring is independent; with the `parallel` feature (default) the scan
//! fans out over rayon and collects scores back in corpus order, so
//! parallel and serial runs return byte-identical result lists.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::Record;
use crate::error::SearchError;
use crate::scoring::{FieldWeights, RelevanceScorer};
use crate::search::options::SearchOptions;
use crate::search::ranking::rank;
use crate::text::query_terms;

/// Result count when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// A record that matched, plus its relevance score in `[0, 1]`.
///
/// Serializes with the record fields flattened beside `score`, so one
/// result is a single flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: Record,
    pub score: f64,
}

/// Scores a corpus against a query and returns the top records.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    scorer: RelevanceScorer,
}

impl SearchEngine {
    /// An engine with the default field weights.
    pub fn new() -> Self {
        SearchEngine::default()
    }

    /// An engine scoring with a custom weight profile.
    pub fn with_weights(weights: FieldWeights) -> Self {
        SearchEngine {
            scorer: RelevanceScorer::new(weights),
        }
    }

    pub fn weights(&self) -> &FieldWeights {
        self.scorer.weights()
    }

    /// Top-`limit` records by relevance.
    ///
    /// Shorthand for [`search_with_options`](Self::search_with_options)
    /// with default options and the given limit.
    pub fn search(
        &self,
        corpus: &[Record],
        query: &str,
        limit: usize,
    ) -> Result<Vec<ScoredResult>, SearchError> {
        let options = SearchOptions {
            limit,
            ..SearchOptions::default()
        };
        self.search_with_options(corpus, query, &options)
    }

    /// The full search pipeline.
    ///
    /// 1. Reject `limit == 0` before any scoring.
    /// 2. Normalize the query into terms; no terms means an empty result
    ///    list, not an error.
    /// 3. Apply the category pre-filter, keeping corpus order.
    /// 4. Score every candidate; drop exact zeros.
    /// 5. Rank per `options.order` (stable, ties keep corpus order) and
    ///    truncate to `options.limit`.
    ///
    /// Records never mutate; results carry clones of the survivors only.
    pub fn search_with_options(
        &self,
        corpus: &[Record],
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ScoredResult>, SearchError> {
        if options.limit == 0 {
            return Err(SearchError::InvalidLimit);
        }

        let terms = query_terms(query);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let candidates: Vec<&Record> = match options.category {
            Some(category) => corpus.iter().filter(|r| r.category == category).collect(),
            None => corpus.iter().collect(),
        };

        // Indexed collect keeps scores aligned with candidate order, so
        // the stable tie-break below is identical on every run
        #[cfg(feature = "parallel")]
        let scores: Vec<f64> = candidates
            .par_iter()
            .map(|record| self.scorer.score_terms(&terms, record))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let scores: Vec<f64> = candidates
            .iter()
            .map(|record| self.scorer.score_terms(&terms, record))
            .collect();

        let mut hits: Vec<ScoredResult> = candidates
            .into_iter()
            .zip(scores)
            .filter(|(_, score)| *score > 0.0)
            .map(|(record, score)| ScoredResult {
                record: record.clone(),
                score,
            })
            .collect();

        rank(&mut hits, options.order);
        hits.truncate(options.limit);
        Ok(hits)
    }
}
