// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field weighting configuration.
//!
//! Weights travel with the scorer as an explicit value - there is no global
//! table. Tests and callers swap in alternate profiles by handing the engine
//! a different [`FieldWeights`].
//!
//! # Default profile
//!
//! | Field    | Weight | Why this value |
//! |----------|--------|----------------|
//! | title    | 3.0    | Titles are curated; a hit there is the strongest signal |
//! | category | 2.0    | Source-kind hits ("wiki", "api") are short but decisive |
//! | snippet  | 1.5    | Hand-picked extract, denser than raw content |
//! | author   | 1.2    | Useful for "who wrote this" queries, easy to over-match |
//! | content  | 1.0    | Baseline - longest field, cheapest hit |

use serde::{Deserialize, Serialize};

/// Default weight for title matches.
pub const TITLE_WEIGHT: f64 = 3.0;

/// Default weight for content matches.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Default weight for snippet matches.
pub const SNIPPET_WEIGHT: f64 = 1.5;

/// Default weight for category matches.
pub const CATEGORY_WEIGHT: f64 = 2.0;

/// Default weight for author matches.
pub const AUTHOR_WEIGHT: f64 = 1.2;

/// Relative importance of each scored field.
///
/// `#[serde(default)]` lets a JSON profile override a subset of fields and
/// inherit the rest: `{"title": 10.0}` is a complete profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub content: f64,
    pub snippet: f64,
    pub category: f64,
    pub author: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: TITLE_WEIGHT,
            content: CONTENT_WEIGHT,
            snippet: SNIPPET_WEIGHT,
            category: CATEGORY_WEIGHT,
            author: AUTHOR_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// Sum of all field weights: the most one query term can earn on one
    /// record. The scorer divides by `terms × total()` to land in `[0, 1]`.
    pub fn total(&self) -> f64 {
        self.title + self.content + self.snippet + self.category + self.author
    }
}
