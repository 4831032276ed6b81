//! Run-to-run stability of results and scores.

use ferret::{Category, ScoredResult, SearchEngine, SearchOptions};

use super::common::{knowledge_base, record};

fn fingerprint(results: &[ScoredResult]) -> Vec<(String, u64)> {
    results
        .iter()
        .map(|r| (r.record.id.clone(), r.score.to_bits()))
        .collect()
}

#[test]
fn test_repeated_searches_are_bit_identical() {
    let corpus = knowledge_base();
    let engine = SearchEngine::new();
    let first = fingerprint(&engine.search(&corpus, "api deployment", 10).unwrap());
    for _ in 0..10 {
        let again = fingerprint(&engine.search(&corpus, "api deployment", 10).unwrap());
        assert_eq!(again, first);
    }
}

#[test]
fn test_unrelated_records_leave_scores_untouched() {
    let corpus = knowledge_base();
    let engine = SearchEngine::new();
    let baseline = fingerprint(&engine.search(&corpus, "api", 10).unwrap());

    let mut padded = vec![record("pad", "zzz", "zzz", Category::Email)];
    padded.extend(corpus);
    let shifted = fingerprint(&engine.search(&padded, "api", 10).unwrap());
    assert_eq!(shifted, baseline);
}

#[test]
fn test_cloned_engine_agrees() {
    let corpus = knowledge_base();
    let engine = SearchEngine::new();
    let copy = engine.clone();
    assert_eq!(
        fingerprint(&engine.search(&corpus, "rollout", 10).unwrap()),
        fingerprint(&copy.search(&corpus, "rollout", 10).unwrap()),
    );
}

#[test]
fn test_truncation_is_a_prefix() {
    let corpus = knowledge_base();
    let engine = SearchEngine::new();
    let full = fingerprint(&engine.search(&corpus, "api", 10).unwrap());
    let one = fingerprint(&engine.search(&corpus, "api", 1).unwrap());
    assert_eq!(one.len(), 1);
    assert_eq!(one[0], full[0]);
}

#[test]
fn test_shorthand_matches_explicit_options() {
    let corpus = knowledge_base();
    let engine = SearchEngine::new();
    let options = SearchOptions {
        limit: 7,
        ..SearchOptions::default()
    };
    assert_eq!(
        fingerprint(&engine.search(&corpus, "api", 7).unwrap()),
        fingerprint(&engine.search_with_options(&corpus, "api", &options).unwrap()),
    );
}
