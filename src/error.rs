// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for search and corpus loading.
//!
//! Two failure surfaces, kept apart on purpose: [`SearchError`] covers caller
//! mistakes against the engine API, [`CorpusError`] covers everything that can
//! go wrong between a file on disk and a usable record list. A query that
//! matches nothing is not an error - that is an empty result list.

use std::path::PathBuf;

/// Errors raised by [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `limit` was zero. A zero limit would silently return nothing, so the
    /// engine rejects it before any scoring happens.
    #[error("invalid limit: limit must be at least 1")]
    InvalidLimit,
}

/// Errors raised while loading or validating a corpus file.
///
/// Loading is all-or-nothing: the first bad record fails the load. See
/// [`load_corpus`](crate::corpus::load_corpus) for the policy rationale.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a record is missing a required field
    /// or carries an unknown category.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record deserialized cleanly but violates a corpus invariant.
    #[error("record {id:?}: {reason}")]
    Integrity { id: String, reason: String },
}
