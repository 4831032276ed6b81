//! Typo-tolerant relevance search over short text records.
//!
//! This crate scores a corpus of knowledge records (docs, API references,
//! wiki pages, chat threads, email) against free-text queries. Exact
//! substring hits earn full field weight; terms with no exact home fall
//! back to Levenshtein similarity over individual words at a discount.
//! Every search is a full scan - no index to build, no index to go stale.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  text.rs   │────▶│   fuzzy/    │────▶│   scoring/   │
//! │ (normalize,│     │ (distance,  │     │(FieldWeights,│
//! │query_terms)│     │ similarity) │     │  scorer)     │
//! └────────────┘     └─────────────┘     └──────────────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌────────────┐                        ┌──────────────┐
//! │  corpus/   │───────────────────────▶│   search/    │
//! │ (Record,   │                        │(SearchEngine,│
//! │  loading)  │                        │ options)     │
//! └────────────┘                        └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ferret::{Category, Record, SearchEngine};
//!
//! let corpus = vec![Record {
//!     id: "kb-1".to_string(),
//!     title: "API Documentation".to_string(),
//!     content: "How to use the REST API".to_string(),
//!     category: Category::Api,
//!     source: "docs-site".to_string(),
//!     snippet: "REST API usage and auth".to_string(),
//!     timestamp: "2024-03-01T09:30:00Z".to_string(),
//!     author: Some("Alice".to_string()),
//! }];
//!
//! let engine = SearchEngine::new();
//! let results = engine.search(&corpus, "api", 10)?;
//! assert_eq!(results[0].record.id, "kb-1");
//! # Ok::<(), ferret::SearchError>(())
//! ```

// Module declarations
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod text;

// Re-exports for public API
pub use corpus::{load_corpus, load_weights, Category, Record};
pub use error::{CorpusError, SearchError};
pub use fuzzy::{distance, distance_within, similarity, similarity_within};
pub use scoring::{FieldWeights, RelevanceScorer};
pub use search::{ScoredResult, SearchEngine, SearchOptions, SortOrder, DEFAULT_LIMIT};
pub use text::normalize;
