use super::criterion::Metric;
use super::decision_tree::DecisionTree;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 8;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use minitrees::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(4)
///     .metric(Metric::GainRatio)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    max_depth: usize,
    metric: Metric,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 8,
    /// metric: Metric::InfoGain,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            metric: Metric::InfoGain,
        }
    }


    /// Specify the maximal depth of the tree.
    /// Depth is counted from `0` at the root, so `max_depth == 0`
    /// produces a single majority-label leaf.
    /// Default maximal depth is `8`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set the node splitting metric.
    /// Default value is `Metric::InfoGain`.
    /// See [`Metric`] for other metrics.
    #[inline]
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.metric, self.max_depth)
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
