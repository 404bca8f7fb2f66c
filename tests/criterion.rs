use minitrees::prelude::*;
use minitrees::tree::{
    entropy,
    gain_ratio,
    gini_impurity,
    gini_split,
    information_gain,
    majority_label,
    partition_by_feature,
    split_info,
};


/// Build a labeled sample from string rows.
/// The last column is the target.
fn sample(names: &[&str], rows: &[&[&str]]) -> Sample {
    let rows = rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect::<Vec<Vec<String>>>();

    let target = names[names.len() - 1];
    Sample::from_rows(names, rows)
        .unwrap()
        .set_target(target)
        .unwrap()
}


/// The four-row dataset where feature `A` separates the classes
/// perfectly and feature `B` carries no information at all.
fn separable() -> Sample {
    sample(
        &["A", "B", "L"],
        &[
            &["a1", "b1", "yes"],
            &["a1", "b2", "yes"],
            &["a2", "b1", "no"],
            &["a2", "b2", "no"],
        ],
    )
}


#[test]
fn gini_impurity_is_zero_iff_pure() {
    let pure = sample(
        &["x", "y"],
        &[&["a", "yes"], &["b", "yes"], &["c", "yes"]],
    );
    let idx = pure.indices();
    assert_eq!(gini_impurity(&pure, &idx, 1), 0.0);

    let mixed = separable();
    let idx = mixed.indices();
    let g = gini_impurity(&mixed, &idx, 2);
    assert!((g - 0.5).abs() < 1e-12);
}


#[test]
fn gini_impurity_stays_in_bounds() {
    let three = sample(
        &["x", "y"],
        &[&["a", "u"], &["b", "v"], &["c", "w"]],
    );
    let idx = three.indices();
    let g = gini_impurity(&three, &idx, 1);

    // k = 3 distinct labels, uniform: g == 1 - 1/3.
    assert!(g >= 0.0);
    assert!(g <= 1.0 - 1.0 / 3.0 + 1e-12);
    assert!((g - 2.0 / 3.0).abs() < 1e-12);
}


#[test]
fn entropy_is_zero_iff_pure_and_one_bit_at_even_odds() {
    let pure = sample(
        &["x", "y"],
        &[&["a", "yes"], &["b", "yes"]],
    );
    let idx = pure.indices();
    assert_eq!(entropy(&pure, &idx, 1), 0.0);

    let mixed = separable();
    let idx = mixed.indices();
    assert!((entropy(&mixed, &idx, 2) - 1.0).abs() < 1e-12);
}


#[test]
fn information_gain_of_a_perfect_split_is_one_bit() {
    let s = separable();
    let idx = s.indices();

    let gain_a = information_gain(&s, &idx, 0, 2);
    let gain_b = information_gain(&s, &idx, 1, 2);

    assert!((gain_a - 1.0).abs() < 1e-12);
    assert!(gain_b.abs() < 1e-12);
}


#[test]
fn information_gain_is_never_negative() {
    let s = sample(
        &["weather", "company", "go_out"],
        &[
            &["sunny", "alone", "yes"],
            &["sunny", "friends", "yes"],
            &["rainy", "alone", "no"],
            &["rainy", "friends", "yes"],
            &["windy", "alone", "no"],
            &["windy", "friends", "no"],
        ],
    );
    let idx = s.indices();

    for feature in s.feature_indices() {
        assert!(information_gain(&s, &idx, feature, 2) >= 0.0);
    }
}


#[test]
fn gini_split_prefers_the_separating_feature() {
    let s = separable();
    let idx = s.indices();

    assert_eq!(gini_split(&s, &idx, 0, 2), 0.0);
    assert!((gini_split(&s, &idx, 1, 2) - 0.5).abs() < 1e-12);
}


#[test]
fn gain_ratio_of_a_constant_feature_is_exactly_zero() {
    let s = sample(
        &["const", "other", "y"],
        &[
            &["same", "p", "yes"],
            &["same", "q", "no"],
            &["same", "p", "yes"],
        ],
    );
    let idx = s.indices();

    assert_eq!(split_info(&s, &idx, 0), 0.0);
    assert_eq!(gain_ratio(&s, &idx, 0, 2), 0.0);
}


#[test]
fn gain_ratio_normalizes_by_split_info() {
    let s = separable();
    let idx = s.indices();

    // Information gain of `A` is one bit and its split info is
    // one bit as well, so the ratio is exactly one.
    assert!((gain_ratio(&s, &idx, 0, 2) - 1.0).abs() < 1e-12);
}


#[test]
fn majority_label_counts_and_breaks_ties_lexicographically() {
    let s = sample(
        &["x", "y"],
        &[&["r1", "x"], &["r2", "y"], &["r3", "y"]],
    );
    let idx = s.indices();
    assert_eq!(majority_label(&s, &idx, 1), Some("y"));

    let tied = sample(
        &["x", "y"],
        &[&["r1", "b"], &["r2", "a"], &["r3", "b"], &["r4", "a"]],
    );
    let idx = tied.indices();
    assert_eq!(majority_label(&tied, &idx, 1), Some("a"));

    assert_eq!(majority_label(&tied, &[], 1), None);
}


#[test]
fn partition_groups_rows_by_observed_value() {
    let s = separable();
    let idx = s.indices();

    let subsets = partition_by_feature(&s, &idx, 0);

    // One bucket per observed value, in lexicographic order.
    let keys = subsets.keys().copied().collect::<Vec<_>>();
    assert_eq!(keys, vec!["a1", "a2"]);
    assert_eq!(subsets["a1"], vec![0, 1]);
    assert_eq!(subsets["a2"], vec![2, 3]);
}


#[test]
fn metric_names_parse_and_unknown_names_fail() {
    assert_eq!("gini".parse::<Metric>().unwrap(), Metric::Gini);
    assert_eq!("info".parse::<Metric>().unwrap(), Metric::InfoGain);
    assert_eq!("gain".parse::<Metric>().unwrap(), Metric::GainRatio);

    let err = "entropy".parse::<Metric>().unwrap_err();
    assert!(matches!(err, MiniTreesError::UnknownMetric(name) if name == "entropy"));
}
