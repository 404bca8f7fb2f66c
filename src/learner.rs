//! Defines the `Learner` trait.
use crate::classifier::Classifier;
use crate::error::MiniTreesError;
use crate::sample::Sample;


/// A trait for algorithms that fit a model to a [`Sample`].
pub trait Learner {
    /// The fitted model type.
    type Model: Classifier;


    /// A human-readable name of the algorithm.
    fn name(&self) -> &str;


    /// Returns the pairs of parameter name and value, if any.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fit a model to `sample`.
    /// The target column of `sample` must be set.
    fn fit(&self, sample: &Sample) -> Result<Self::Model, MiniTreesError>;
}
