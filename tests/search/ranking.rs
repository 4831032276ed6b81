//! Sort order behavior through the full engine.

use ferret::{Category, Record, SearchEngine, SearchOptions, SortOrder};

use super::common::{ids, record};

/// Three records that all hit "api" in the title with the same score, so
/// every non-relevance order has to do real work to separate them.
fn editorial_corpus() -> Vec<Record> {
    vec![
        Record {
            author: Some("Mallory".to_string()),
            timestamp: "2024-05-01T10:00:00Z".to_string(),
            ..record("zulu", "Zoning the api edge", "", Category::Wiki)
        },
        Record {
            author: Some("bob".to_string()),
            timestamp: "2023-01-10T10:00:00Z".to_string(),
            ..record("alpha", "api alpha notes", "", Category::Wiki)
        },
        Record {
            timestamp: "2025-02-20T10:00:00Z".to_string(),
            ..record("mike", "Minutes: api sync", "", Category::Wiki)
        },
    ]
}

fn run(corpus: &[Record], order: SortOrder) -> Vec<String> {
    let options = SearchOptions {
        order,
        ..SearchOptions::default()
    };
    let results = SearchEngine::new()
        .search_with_options(corpus, "api", &options)
        .unwrap();
    results.iter().map(|r| r.record.id.clone()).collect()
}

#[test]
fn test_relevance_ties_keep_corpus_order() {
    assert_eq!(run(&editorial_corpus(), SortOrder::Relevance), ["zulu", "alpha", "mike"]);
}

#[test]
fn test_title_order_is_alphabetical_and_case_insensitive() {
    // Byte order would put "Minutes" before "api"; folded order must not
    assert_eq!(run(&editorial_corpus(), SortOrder::Title), ["alpha", "mike", "zulu"]);
}

#[test]
fn test_newest_order_is_reverse_chronological() {
    assert_eq!(run(&editorial_corpus(), SortOrder::Newest), ["mike", "zulu", "alpha"]);
}

#[test]
fn test_author_order_folds_case_and_parks_authorless_last() {
    // "bob" < "Mallory" once folded; the authorless record trails both
    assert_eq!(run(&editorial_corpus(), SortOrder::Author), ["alpha", "zulu", "mike"]);
}

#[test]
fn test_equal_titles_keep_corpus_order() {
    let corpus = vec![
        record("first", "api runbook", "", Category::Wiki),
        record("second", "api runbook", "", Category::Wiki),
    ];
    assert_eq!(run(&corpus, SortOrder::Title), ["first", "second"]);
}

#[test]
fn test_zero_scores_drop_before_ordering() {
    // "AAA guide" sorts first alphabetically but never matches the query,
    // so it must not surface under any order
    let mut corpus = editorial_corpus();
    corpus.push(record("noise", "AAA guide", "unrelated text", Category::Wiki));
    for order in [
        SortOrder::Relevance,
        SortOrder::Title,
        SortOrder::Newest,
        SortOrder::Author,
    ] {
        let ranked = run(&corpus, order);
        assert_eq!(ranked.len(), 3, "noise leaked into {order:?}");
        assert!(!ranked.iter().any(|id| id == "noise"));
    }
}

#[test]
fn test_limit_truncates_after_ordering() {
    let options = SearchOptions {
        limit: 2,
        order: SortOrder::Newest,
        ..SearchOptions::default()
    };
    let results = SearchEngine::new()
        .search_with_options(&editorial_corpus(), "api", &options)
        .unwrap();
    assert_eq!(ids(&results), ["mike", "zulu"]);
}
