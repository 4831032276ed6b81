// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strict JSON corpus loading.
//!
//! One file, one JSON array of records. The policy is fail-fast: the first
//! unreadable file, malformed record, or integrity violation aborts the
//! whole load. A half-loaded corpus would quietly skew every score computed
//! against it, so there is no lenient mode.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::corpus::Record;
use crate::error::CorpusError;
use crate::scoring::FieldWeights;

/// Load a corpus from a JSON file containing an array of records.
///
/// Beyond deserialization, two corpus-level invariants are enforced:
/// every `id` must be non-empty, and no `id` may repeat. Records are
/// returned in file order - the engine uses that order to break score ties,
/// so the provider must not reorder them.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Record>, CorpusError> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    let records: Vec<Record> = parse_json(path, &raw)?;
    validate(&records)?;
    Ok(records)
}

/// Load an alternate field-weight profile from a JSON file.
///
/// Missing fields fall back to the default weights, so a profile can
/// override just one field:
///
/// ```json
/// { "title": 10.0 }
/// ```
pub fn load_weights(path: impl AsRef<Path>) -> Result<FieldWeights, CorpusError> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    parse_json(path, &raw)
}

fn read_file(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<T, CorpusError> {
    serde_json::from_str(raw).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Corpus-level invariants serde cannot express.
fn validate(records: &[Record]) -> Result<(), CorpusError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        if record.id.trim().is_empty() {
            return Err(CorpusError::Integrity {
                id: record.id.clone(),
                reason: "empty id".to_string(),
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CorpusError::Integrity {
                id: record.id.clone(),
                reason: "duplicate id".to_string(),
            });
        }
    }
    Ok(())
}
