//! Splitting metrics and the impurity functions behind them.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;
use std::collections::BTreeMap;

use crate::error::MiniTreesError;
use crate::sample::Sample;
use super::partition::partition_by_feature;


/// Gain ratio is clamped to zero once the split information
/// falls below this threshold, since a (nearly) constant feature
/// carries no usable split.
const SPLIT_INFO_THRESHOLD: f64 = 1e-10;


/// Initial score in the best-feature scan.
/// Every real metric score is finite and far above this,
/// so a candidate feature always wins unless something
/// degenerate happens.
const SCORE_SENTINEL: f64 = f64::MIN;


/// Splitting metric for growing a decision tree.
/// * `Metric::Gini` minimizes the size-weighted Gini impurity
///   of the partition.
/// * `Metric::InfoGain` maximizes the information gain
///   (reduction in label entropy).
/// * `Metric::GainRatio` maximizes the gain ratio,
///   the information gain normalized by the split information.
///
/// The metric names accepted by [`Metric::from_str`] are
/// `gini`, `info`, and `gain`; anything else is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Size-weighted Gini impurity of the partition.
    Gini,
    /// Information gain.
    InfoGain,
    /// Gain ratio.
    GainRatio,
}


impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::InfoGain => "Information gain",
            Self::GainRatio => "Gain ratio",
        };

        write!(f, "{name}")
    }
}


impl FromStr for Metric {
    type Err = MiniTreesError;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "gini" => Ok(Self::Gini),
            "info" => Ok(Self::InfoGain),
            "gain" => Ok(Self::GainRatio),
            _ => Err(MiniTreesError::UnknownMetric(name.to_string())),
        }
    }
}


impl Metric {
    /// The score of splitting the rows in `idx` by `feature`.
    /// The Gini split is negated so that a higher score is better
    /// for every metric.
    pub(crate) fn score(
        &self,
        sample: &Sample,
        idx: &[usize],
        feature: usize,
        target: usize,
    ) -> f64
    {
        match self {
            Self::Gini => -gini_split(sample, idx, feature, target),
            Self::InfoGain => information_gain(sample, idx, feature, target),
            Self::GainRatio => gain_ratio(sample, idx, feature, target),
        }
    }


    /// Returns the feature in `features` with the strictly highest
    /// score over the rows in `idx`.
    /// Ties resolve to the feature seen first, so with the usual
    /// ascending feature list the lowest column index wins.
    /// Answers `None` only when no score beats the sentinel.
    pub(crate) fn best_split(
        &self,
        sample: &Sample,
        idx: &[usize],
        features: &[usize],
        target: usize,
    ) -> Option<usize>
    {
        let mut best_score = SCORE_SENTINEL;
        let mut best_feature = None;

        for &feature in features {
            let score = self.score(sample, idx, feature, target);
            if score > best_score {
                best_score = score;
                best_feature = Some(feature);
            }
        }

        best_feature
    }
}


/// Counts the distinct values in `column` over the rows in `idx`.
fn value_counts<'a>(sample: &'a Sample, idx: &[usize], column: usize)
    -> BTreeMap<&'a str, usize>
{
    let mut counts = BTreeMap::new();
    for &i in idx {
        *counts.entry(sample.value(i, column)).or_insert(0_usize) += 1;
    }
    counts
}


/// Returns the Gini impurity of `column` over the rows in `idx`:
/// one minus the sum of squared class-frequency fractions.
/// Zero means a pure subset; an empty subset answers `0.0`.
pub fn gini_impurity(sample: &Sample, idx: &[usize], column: usize) -> f64 {
    if idx.is_empty() { return 0.0; }

    let total = idx.len() as f64;
    let correct = value_counts(sample, idx, column)
        .values()
        .map(|&count| (count as f64 / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// Returns the Shannon entropy (in bits) of `column`
/// over the rows in `idx`.
/// Zero means a pure subset; an empty subset answers `0.0`.
pub fn entropy(sample: &Sample, idx: &[usize], column: usize) -> f64 {
    if idx.is_empty() { return 0.0; }

    let total = idx.len() as f64;
    value_counts(sample, idx, column)
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            if p <= 0.0 { 0.0 } else { -p * p.log2() }
        })
        .sum::<f64>()
}


/// The size-weighted average Gini impurity after partitioning
/// the rows in `idx` by `feature`. Lower is better.
pub fn gini_split(sample: &Sample, idx: &[usize], feature: usize, target: usize)
    -> f64
{
    let total = idx.len() as f64;
    partition_by_feature(sample, idx, feature)
        .values()
        .map(|subset| {
            let weight = subset.len() as f64 / total;
            weight * gini_impurity(sample, subset, target)
        })
        .sum()
}


/// The reduction in label entropy achieved by partitioning
/// the rows in `idx` by `feature`. Never negative.
pub fn information_gain(sample: &Sample, idx: &[usize], feature: usize, target: usize)
    -> f64
{
    let total_entropy = entropy(sample, idx, target);

    let total = idx.len() as f64;
    let subset_entropy = partition_by_feature(sample, idx, feature)
        .values()
        .map(|subset| {
            let weight = subset.len() as f64 / total;
            weight * entropy(sample, subset, target)
        })
        .sum::<f64>();

    total_entropy - subset_entropy
}


/// The entropy of the value distribution of `feature` itself,
/// the denominator of the gain ratio.
pub fn split_info(sample: &Sample, idx: &[usize], feature: usize) -> f64 {
    entropy(sample, idx, feature)
}


/// The information gain normalized by the split information.
/// Answers exactly `0.0` when the split information vanishes,
/// which happens iff `feature` is constant over the rows in `idx`.
pub fn gain_ratio(sample: &Sample, idx: &[usize], feature: usize, target: usize)
    -> f64
{
    let info_gain = information_gain(sample, idx, feature, target);
    let split_information = split_info(sample, idx, feature);

    if split_information < SPLIT_INFO_THRESHOLD {
        return 0.0;
    }

    info_gain / split_information
}


/// Returns the most frequent value of `column` over the rows in `idx`,
/// or `None` for an empty subset.
/// Ties resolve to the lexicographically smallest value.
pub fn majority_label<'a>(sample: &'a Sample, idx: &[usize], column: usize)
    -> Option<&'a str>
{
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in value_counts(sample, idx, column) {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}
