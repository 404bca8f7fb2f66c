//! The decision-tree induction algorithm
//! over categorical features.
use std::fmt;
use std::collections::BTreeMap;

use crate::error::MiniTreesError;
use crate::learner::Learner;
use crate::sample::Sample;

use super::criterion::{majority_label, Metric};
use super::node::{BranchNode, LeafNode, Node, UNKNOWN_LABEL};
use super::partition::partition_by_feature;
use super::decision_tree_classifier::DecisionTreeClassifier;


/// The decision-tree induction algorithm.
/// Given a categorical [`Sample`] with a target column,
/// [`DecisionTree`] grows a [`DecisionTreeClassifier`]
/// by recursive partitioning under the configured [`Metric`],
/// one branch per observed feature value, each feature used
/// at most once per root-to-leaf path.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// // Read the training data from a CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let (train, test) = train_test_split(&sample, 0.7, 1234).unwrap();
///
/// // In this example, the output tree is at most depth 4.
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(4)
///     .metric(Metric::GainRatio)
///     .build();
/// let f = tree.fit(&train).unwrap();
///
/// println!("accuracy (test): {}%", accuracy(&f, &test).unwrap());
/// ```
pub struct DecisionTree {
    metric: Metric,
    max_depth: usize,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(metric: Metric, max_depth: usize) -> Self {
        Self { metric, max_depth, }
    }


    /// Grow the subtree for the rows selected by `idx`.
    /// The base cases are checked in this order:
    /// empty subset, pure subset, exhausted features or depth,
    /// unresolvable split; everything else branches and recurses.
    fn grow(
        &self,
        sample: &Sample,
        idx: &[usize],
        features: &[usize],
        target: usize,
        depth: usize,
    ) -> Node
    {
        // Nothing to learn from.
        if idx.is_empty() {
            return Node::Leaf(LeafNode::from_raw(UNKNOWN_LABEL));
        }

        // Every row carries the same label.
        let first_label = sample.value(idx[0], target);
        if idx.iter().all(|&i| sample.value(i, target) == first_label) {
            return Node::Leaf(LeafNode::from_raw(first_label));
        }

        // No feature left to split on, or the depth cap is reached.
        if features.is_empty() || depth >= self.max_depth {
            let label = majority_label(sample, idx, target)
                .unwrap_or(UNKNOWN_LABEL);
            return Node::Leaf(LeafNode::from_raw(label));
        }

        // `best_split` answers `None` only when no score beats
        // the sentinel.
        let best = match self.metric.best_split(sample, idx, features, target) {
            Some(feature) => feature,
            None => {
                let label = majority_label(sample, idx, target)
                    .unwrap_or(UNKNOWN_LABEL);
                return Node::Leaf(LeafNode::from_raw(label));
            },
        };

        // The winning feature is excluded from every subtree.
        let remaining = features.iter()
            .copied()
            .filter(|&feature| feature != best)
            .collect::<Vec<_>>();

        let children = partition_by_feature(sample, idx, best)
            .into_iter()
            .map(|(value, subset)| {
                let child = self.grow(
                    sample, &subset[..], &remaining[..], target, depth + 1
                );
                (value.to_string(), child)
            })
            .collect::<BTreeMap<_, _>>();

        let feature_name = sample.names()[best].clone();
        Node::Branch(BranchNode::from_raw(best, feature_name, children))
    }
}


impl Learner for DecisionTree {
    type Model = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split metric", format!("{}", self.metric)),
        ]);
        Some(info)
    }


    /// Builds the whole tree in a single pass over `sample`.
    /// The only failure is a sample whose target column is not set.
    #[inline]
    fn fit(&self, sample: &Sample) -> Result<Self::Model, MiniTreesError> {
        let target = sample.target_index()?;
        let idx = sample.indices();
        let features = sample.feature_indices();

        let root = self.grow(sample, &idx[..], &features[..], target, 0);

        Ok(DecisionTreeClassifier::from(root))
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            - Splitting metric: {}\n\
            ----------\
            ",
            self.max_depth,
            self.metric,
        )
    }
}
