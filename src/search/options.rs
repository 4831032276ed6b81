// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-search knobs: result budget, category pre-filter, result ordering.

use std::fmt;
use std::str::FromStr;

use crate::corpus::Category;
use crate::search::engine::DEFAULT_LIMIT;

/// How a result page is ordered after zero scores are dropped.
///
/// Every order sorts stably, so records that compare equal keep their
/// corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Score descending. The default.
    #[default]
    Relevance,
    /// Title ascending, case-insensitive.
    Title,
    /// Timestamp descending. RFC 3339 strings order lexicographically.
    Newest,
    /// Author ascending, case-insensitive; authorless records sort last.
    Author,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Title => "title",
            SortOrder::Newest => "newest",
            SortOrder::Author => "author",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "title" => Ok(SortOrder::Title),
            "newest" => Ok(SortOrder::Newest),
            "author" => Ok(SortOrder::Author),
            other => Err(format!(
                "unknown sort order {other:?} (expected one of: relevance, title, newest, author)"
            )),
        }
    }
}

/// Options for one search call.
///
/// `Default` gives the plain top-10-by-relevance search; callers override
/// fields with struct-update syntax:
///
/// ```
/// use ferret::{Category, SearchOptions};
///
/// let options = SearchOptions {
///     category: Some(Category::Wiki),
///     ..SearchOptions::default()
/// };
/// assert_eq!(options.limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results returned. Zero is rejected by the engine.
    pub limit: usize,
    /// When set, records of every other category are excluded before
    /// scoring.
    pub category: Option<Category>,
    /// Ordering of the returned page.
    pub order: SortOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_LIMIT,
            category: None,
            order: SortOrder::Relevance,
        }
    }
}
