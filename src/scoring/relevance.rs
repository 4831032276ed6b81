// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance computation, term by term, field by field.
//!
//! Each query term is scored in two passes. The exact pass checks substring
//! containment against every scored field and collects the full field weight
//! per hit. Only when a term earns exactly nothing does the fuzzy pass run:
//! each word of each field is compared by edit-distance similarity, and every
//! word clearing the threshold contributes `weight × similarity × 0.8`.
//!
//! The fuzzy pass sums over all qualifying words - a title like
//! "apple apples" credits a near-miss term twice. Repeated near-matches
//! signal stronger relevance for these short records, and the final
//! normalization caps the total at 1.0.
//!
//! # Constants
//!
//! | Constant          | Value | Role |
//! |-------------------|-------|------|
//! | `FUZZY_THRESHOLD` | 0.6   | Minimum similarity for a fuzzy contribution |
//! | `FUZZY_DISCOUNT`  | 0.8   | Fuzzy hits are worth 80% of an exact hit |
//! | `MIN_FUZZY_LEN`   | 3     | Shorter terms/words skip fuzzy entirely |

use crate::corpus::Record;
use crate::fuzzy::similarity_within;
use crate::scoring::FieldWeights;
use crate::text::{normalize, query_terms};

/// Similarity floor for the fuzzy pass. Below this, a candidate word
/// contributes nothing.
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Discount applied to fuzzy contributions relative to an exact hit.
pub const FUZZY_DISCOUNT: f64 = 0.8;

/// Minimum character length for both the term and the candidate word before
/// the fuzzy pass will consider the pair. Two-letter typos are noise.
pub const MIN_FUZZY_LEN: usize = 3;

/// Scores one record against a query.
///
/// A pure function of (query, record, weights): no corpus state, no caching,
/// no mutation. Construct it once and share it across as many records and
/// threads as you like.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: FieldWeights,
}

impl RelevanceScorer {
    pub fn new(weights: FieldWeights) -> Self {
        RelevanceScorer { weights }
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Relevance of `record` for `query`, in `[0, 1]`.
    ///
    /// The query is normalized and split into whitespace terms; each term
    /// scores independently and the sum is divided by the best possible
    /// score (`terms × weights.total()`), capped at 1.0. A query with no
    /// terms scores 0.
    pub fn score(&self, query: &str, record: &Record) -> f64 {
        self.score_terms(&query_terms(query), record)
    }

    /// Scoring against pre-split terms. The engine normalizes the query once
    /// per search, not once per record.
    pub(crate) fn score_terms(&self, terms: &[String], record: &Record) -> f64 {
        if terms.is_empty() {
            return 0.0;
        }
        let max_possible = terms.len() as f64 * self.weights.total();
        if max_possible <= 0.0 {
            return 0.0;
        }

        let fields = ScoredFields::from_record(record);
        let total: f64 = terms
            .iter()
            .map(|term| self.term_score(term, &fields))
            .sum();

        (total / max_possible).min(1.0)
    }

    fn term_score(&self, term: &str, fields: &ScoredFields) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;

        if fields.title.contains(term) {
            score += w.title;
        }
        if fields.content.contains(term) {
            score += w.content;
        }
        if fields.category.contains(term) {
            score += w.category;
        }
        if fields.snippet.contains(term) {
            score += w.snippet;
        }
        if fields.author.contains(term) {
            score += w.author;
        }

        // Fuzzy is strictly a fallback: a term with any exact hit keeps it
        if score == 0.0 && term.chars().count() >= MIN_FUZZY_LEN {
            score += fuzzy_field_score(term, &fields.title, w.title);
            score += fuzzy_field_score(term, &fields.content, w.content);
            score += fuzzy_field_score(term, &fields.snippet, w.snippet);
            // Category is one token; no word splitting
            score += fuzzy_word_score(term, &fields.category, w.category);
            score += fuzzy_field_score(term, &fields.author, w.author);
        }

        score
    }
}

/// The normalized text the scorer actually reads. Built once per record,
/// reused across all terms of the query. `source` is deliberately absent.
struct ScoredFields {
    title: String,
    content: String,
    snippet: String,
    category: String,
    author: String,
}

impl ScoredFields {
    fn from_record(record: &Record) -> Self {
        ScoredFields {
            title: normalize(&record.title),
            content: normalize(&record.content),
            snippet: normalize(&record.snippet),
            category: normalize(record.category.as_str()),
            author: record.author.as_deref().map(normalize).unwrap_or_default(),
        }
    }
}

/// Summed fuzzy contributions from every qualifying word of one field.
fn fuzzy_field_score(term: &str, field: &str, weight: f64) -> f64 {
    field
        .split_whitespace()
        .map(|word| fuzzy_word_score(term, word, weight))
        .sum()
}

/// Discounted contribution of a single candidate word, or 0.0 if the word is
/// too short or too dissimilar. Callers have already checked the term length.
fn fuzzy_word_score(term: &str, word: &str, weight: f64) -> f64 {
    if word.chars().count() < MIN_FUZZY_LEN {
        return 0.0;
    }
    match similarity_within(term, word, FUZZY_THRESHOLD) {
        Some(sim) => weight * sim * FUZZY_DISCOUNT,
        None => 0.0,
    }
}
