// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record model for a knowledge corpus.
//!
//! A corpus is just a `Vec<Record>` - the engine never fetches, caches, or
//! persists anything. Records come from whatever provider the caller has;
//! the one bundled here ([`load_corpus`]) reads a JSON array from disk and
//! fails fast on anything structurally suspect.
//!
//! # Invariants
//!
//! - `id` is non-empty and unique across the corpus (enforced on load)
//! - `category` is one of the five known source kinds - the enum makes an
//!   unknown category a parse error, not a silent misfile
//! - `source` is provenance metadata for display; it never enters scoring

mod loader;

pub use loader::{load_corpus, load_weights};

use serde::{Deserialize, Serialize};

/// Which source system a record came from.
///
/// Serialized lowercase, and scored by that lowercase name: a query term
/// "wiki" gets the full category weight on every wiki record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Documentation,
    Api,
    Wiki,
    Slack,
    Email,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Documentation,
        Category::Api,
        Category::Wiki,
        Category::Slack,
        Category::Email,
    ];

    /// Lowercase string form, matching the serde `rename_all = "lowercase"`
    /// convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Documentation => "documentation",
            Category::Api => "api",
            Category::Wiki => "wiki",
            Category::Slack => "slack",
            Category::Email => "email",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "documentation" => Ok(Category::Documentation),
            "api" => Ok(Category::Api),
            "wiki" => Ok(Category::Wiki),
            "slack" => Ok(Category::Slack),
            "email" => Ok(Category::Email),
            other => Err(format!(
                "unknown category {other:?} (expected documentation, api, wiki, slack, or email)"
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable knowledge item.
///
/// Five fields participate in scoring (title, content, snippet, category,
/// author); `source` and `timestamp` are carried for display and sorting
/// only. A missing `author` scores as an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub source: String,
    pub snippet: String,
    /// RFC 3339 timestamp. Kept as a string - RFC 3339 orders
    /// lexicographically, which is all the engine needs.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
