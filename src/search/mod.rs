// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: the engine that turns a corpus and a query into ranked results.
//!
//! [`SearchEngine`] owns a scorer and nothing else. Each search scores the
//! corpus (in parallel with the `parallel` feature), drops the zeros, ranks
//! per [`SearchOptions`], and truncates to the limit.

mod engine;
mod options;
mod ranking;

pub use engine::*;
pub use options::*;
