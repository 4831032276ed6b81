//! Scorer differential tests against the flat-arithmetic oracle.

use ferret::{Category, FieldWeights, Record, RelevanceScorer};
use proptest::prelude::*;

use super::oracles::oracle_score;

fn field_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}( [a-z]{3,8}){0,3}").unwrap()
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

prop_compose! {
    fn record_strategy()(
        title in field_text(),
        content in field_text(),
        snippet in field_text(),
        category in category_strategy(),
        author in prop::option::of("[a-z]{3,8}"),
    ) -> Record {
        Record {
            id: "r".to_string(),
            title,
            content,
            category,
            source: "generated".to_string(),
            snippet,
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            author,
        }
    }
}

prop_compose! {
    fn weights_strategy()(
        title in 0.1f64..5.0,
        content in 0.1f64..5.0,
        snippet in 0.1f64..5.0,
        category in 0.1f64..5.0,
        author in 0.1f64..5.0,
    ) -> FieldWeights {
        FieldWeights { title, content, snippet, category, author }
    }
}

/// A record together with a query biased toward its own vocabulary, so the
/// exact and fuzzy paths both get exercised instead of everything scoring
/// zero.
fn record_and_query() -> impl Strategy<Value = (Record, String)> {
    record_strategy().prop_flat_map(|record| {
        let from_title = record
            .title
            .split_whitespace()
            .next()
            .unwrap_or("x")
            .to_string();
        let mutated = format!("{from_title}x");
        (
            Just(record),
            prop_oneof![
                Just(from_title),
                Just(mutated),
                prop::string::string_regex("[a-z]{2,8}( [a-z]{2,8}){0,2}").unwrap(),
            ],
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_score_matches_oracle((record, query) in record_and_query()) {
        let scorer = RelevanceScorer::new(FieldWeights::default());
        let got = scorer.score(&query, &record);
        let want = oracle_score(&query, &record, &FieldWeights::default());
        prop_assert!((got - want).abs() < 1e-12, "{got} vs oracle {want} for {query:?}");
    }

    #[test]
    fn prop_score_matches_oracle_under_any_weights(
        (record, query) in record_and_query(),
        weights in weights_strategy(),
    ) {
        let got = RelevanceScorer::new(weights).score(&query, &record);
        let want = oracle_score(&query, &record, &weights);
        prop_assert!((got - want).abs() < 1e-12);
    }

    #[test]
    fn prop_score_stays_in_unit_interval(
        (record, query) in record_and_query(),
        weights in weights_strategy(),
    ) {
        let score = RelevanceScorer::new(weights).score(&query, &record);
        prop_assert!((0.0..=1.0).contains(&score), "score {score} for {query:?}");
    }

    #[test]
    fn prop_blank_queries_score_zero(record in record_strategy()) {
        let scorer = RelevanceScorer::new(FieldWeights::default());
        prop_assert_eq!(scorer.score("", &record).to_bits(), 0.0f64.to_bits());
        prop_assert_eq!(scorer.score("  \t ", &record).to_bits(), 0.0f64.to_bits());
        prop_assert_eq!(scorer.score("?!.", &record).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn prop_zeroed_weights_score_zero((record, query) in record_and_query()) {
        let weights = FieldWeights {
            title: 0.0,
            content: 0.0,
            snippet: 0.0,
            category: 0.0,
            author: 0.0,
        };
        let score = RelevanceScorer::new(weights).score(&query, &record);
        prop_assert_eq!(score.to_bits(), 0.0f64.to_bits());
    }
}
