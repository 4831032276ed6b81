//! Similarity properties and agreement with the bounded fast path.

use ferret::{similarity, similarity_within};
use proptest::prelude::*;

use super::oracles::oracle_similarity;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,10}").unwrap()
}

fn threshold() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.5, 0.6, 0.75])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_similarity_matches_oracle(a in word(), b in word()) {
        let got = similarity(&a, &b);
        let want = oracle_similarity(&a, &b);
        prop_assert!((got - want).abs() < 1e-12, "{got} vs oracle {want}");
    }

    #[test]
    fn prop_similarity_in_unit_interval(a in word(), b in word()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn prop_similarity_is_symmetric(a in word(), b in word()) {
        prop_assert_eq!(similarity(&a, &b).to_bits(), similarity(&b, &a).to_bits());
    }

    #[test]
    fn prop_identical_strings_are_fully_similar(a in word()) {
        prop_assert!((similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_bounded_agrees_with_unbounded(a in word(), b in word(), min in threshold()) {
        let full = similarity(&a, &b);
        match similarity_within(&a, &b, min) {
            Some(s) => {
                prop_assert!(s >= min);
                prop_assert!((s - full).abs() < 1e-12);
            }
            None => prop_assert!(full < min),
        }
    }
}
