//! Full-engine differential tests against a literal scan.

use ferret::{Category, FieldWeights, Record, SearchEngine, SearchOptions};
use proptest::prelude::*;

use super::common::verify_result_invariants;
use super::oracles::oracle_top_k;

fn field_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}( [a-z]{3,8}){0,3}").unwrap()
}

fn query_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}( [a-z]{2,8}){0,2}").unwrap()
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (field_text(), field_text(), category_strategy()),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, content, category))| Record {
                id: format!("doc-{i}"),
                title,
                content,
                category,
                source: "generated".to_string(),
                snippet: String::new(),
                timestamp: format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1),
                author: None,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_search_matches_the_literal_scan(
        corpus in corpus_strategy(),
        query in query_text(),
        limit in 1usize..8,
    ) {
        let results = SearchEngine::new().search(&corpus, &query, limit).unwrap();
        let expected = oracle_top_k(&corpus, &query, limit, &FieldWeights::default());

        prop_assert_eq!(results.len(), expected.len());
        for (got, (want_id, want_score)) in results.iter().zip(&expected) {
            prop_assert_eq!(&got.record.id, want_id);
            prop_assert!(
                (got.score - want_score).abs() < 1e-12,
                "{} scored {} but oracle says {}",
                want_id,
                got.score,
                want_score
            );
        }
    }

    #[test]
    fn prop_results_uphold_the_invariants(
        corpus in corpus_strategy(),
        query in query_text(),
        limit in 1usize..8,
    ) {
        let results = SearchEngine::new().search(&corpus, &query, limit).unwrap();
        verify_result_invariants(&results, &query, limit);
    }

    #[test]
    fn prop_category_filter_equals_manual_prefilter(
        corpus in corpus_strategy(),
        query in query_text(),
        category in category_strategy(),
    ) {
        let options = SearchOptions {
            category: Some(category),
            ..SearchOptions::default()
        };
        let filtered = SearchEngine::new()
            .search_with_options(&corpus, &query, &options)
            .unwrap();

        let manual: Vec<Record> = corpus
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect();
        let expected = oracle_top_k(&manual, &query, options.limit, &FieldWeights::default());

        prop_assert_eq!(filtered.len(), expected.len());
        for (got, (want_id, _)) in filtered.iter().zip(&expected) {
            prop_assert_eq!(&got.record.id, want_id);
        }
    }

    #[test]
    fn prop_bigger_limits_extend_smaller_ones(
        corpus in corpus_strategy(),
        query in query_text(),
    ) {
        let engine = SearchEngine::new();
        let small = engine.search(&corpus, &query, 3).unwrap();
        let large = engine.search(&corpus, &query, 9).unwrap();
        prop_assert!(small.len() <= large.len());
        for (s, l) in small.iter().zip(&large) {
            prop_assert_eq!(&s.record.id, &l.record.id);
            prop_assert_eq!(s.score.to_bits(), l.score.to_bits());
        }
    }
}
