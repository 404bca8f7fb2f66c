#![warn(missing_docs)]

//!
//! A crate that provides decision-tree classifiers
//! for purely categorical data.
//!
//! A tree is grown by recursive partitioning:
//! at every node the best remaining feature is chosen under one of
//! three splitting metrics (Gini index, information gain, gain ratio),
//! the rows are grouped by that feature's values, and one child is
//! grown per observed value. Each feature is used at most once per
//! root-to-leaf path, and growth stops at pure subsets, exhausted
//! features, or the depth cap.
//!
//! Prediction follows the sample's feature values down the tree.
//! A value never observed during training falls back to a majority
//! vote over the immediate leaf children of the current node, and to
//! the label `"unknown"` when that node has no leaf child at all.
//!
//! # Example
//! ```
//! use minitrees::prelude::*;
//!
//! let rows = [
//!     ["a1", "b1", "yes"],
//!     ["a1", "b2", "yes"],
//!     ["a2", "b1", "no"],
//!     ["a2", "b2", "no"],
//! ];
//! let rows = rows.iter()
//!     .map(|row| row.iter().map(|cell| cell.to_string()).collect())
//!     .collect::<Vec<Vec<String>>>();
//!
//! let sample = Sample::from_rows(["A", "B", "L"], rows)
//!     .unwrap()
//!     .set_target("L")
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new()
//!     .metric(Metric::InfoGain)
//!     .build();
//! let f = tree.fit(&sample).unwrap();
//!
//! assert_eq!(f.predict(&["a1", "b1"]), "yes");
//! assert_eq!(f.predict(&["a2", "b2"]), "no");
//! ```

pub mod sample;
pub mod classifier;
pub mod learner;
pub mod tree;
pub mod evaluation;
pub mod model_selection;
pub mod error;
pub mod prelude;


pub use sample::{Sample, SampleReader};

pub use classifier::Classifier;
pub use learner::Learner;

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Metric,
};

pub use evaluation::{accuracy, zero_one_loss};
pub use model_selection::{train_test_split, CrossValidation};

pub use error::MiniTreesError;
