//! Exports the common types and traits of this crate.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::tree::{
    // Induction algorithm and its builder
    DecisionTree,
    DecisionTreeBuilder,

    // Fitted model
    DecisionTreeClassifier,

    // Splitting metric
    Metric,
};


pub use crate::classifier::Classifier;
pub use crate::learner::Learner;


pub use crate::evaluation::{
    accuracy,
    zero_one_loss,
};


pub use crate::model_selection::{
    train_test_split,
    CrossValidation,
};


pub use crate::error::MiniTreesError;
