// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ferret command-line interface.
//!
//! Two subcommands: `search` to query a corpus file and `inspect` to
//! validate one and summarize its shape. Both take the corpus as a JSON
//! file path; `search` additionally accepts the filter/sort/weight knobs
//! the library exposes through [`SearchOptions`](ferret::SearchOptions).

pub mod display;

use clap::{Parser, Subcommand};

use ferret::{Category, SortOrder};

#[derive(Parser)]
#[command(
    name = "ferret",
    about = "Typo-tolerant relevance search over JSON knowledge corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// Path to corpus JSON file (array of records)
        corpus: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Only consider records in this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Result ordering: relevance, title, newest, or author
        #[arg(long, default_value = "relevance")]
        sort: SortOrder,

        /// Path to a JSON field-weight profile
        ///
        /// The profile may name any subset of title, content, snippet,
        /// category, and author; unnamed fields keep their default weight.
        #[arg(long)]
        weights: Option<String>,

        /// Emit results as a JSON array instead of formatted rows
        #[arg(long)]
        json: bool,
    },

    /// Validate a corpus file and summarize its contents
    Inspect {
        /// Path to corpus JSON file (array of records)
        corpus: String,
    },
}
