//! Partitioning rows by the value of a categorical feature.
use std::collections::BTreeMap;

use crate::sample::Sample;


/// Groups the rows selected by `idx` by their value at `feature`.
/// Only values that actually occur get a bucket, so the returned
/// map has exactly one entry per branch a decision node would grow.
/// `BTreeMap` keeps the buckets in lexicographic value order,
/// which makes every downstream scan deterministic.
pub fn partition_by_feature<'a>(sample: &'a Sample, idx: &[usize], feature: usize)
    -> BTreeMap<&'a str, Vec<usize>>
{
    let mut subsets: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &i in idx {
        subsets.entry(sample.value(i, feature))
            .or_default()
            .push(i);
    }

    subsets
}
