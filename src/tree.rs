//! The files in `tree/` directory define the decision-tree model,
//! its induction algorithm, and the splitting metrics.

mod builder;
mod criterion;
mod decision_tree;
mod decision_tree_classifier;
mod node;
mod partition;


pub use builder::{
    DecisionTreeBuilder,
    DEFAULT_MAX_DEPTH,
};

pub use criterion::{
    entropy,
    gain_ratio,
    gini_impurity,
    gini_split,
    information_gain,
    majority_label,
    split_info,
    Metric,
};

pub use decision_tree::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;

pub use node::{
    BranchNode,
    LeafNode,
    Node,
    UNKNOWN_LABEL,
};

pub use partition::partition_by_feature;
