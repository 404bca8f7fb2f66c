//! Evaluating fitted models over labeled samples.
use crate::classifier::Classifier;
use crate::error::MiniTreesError;
use crate::sample::Sample;


/// Classification accuracy of `f` over `sample`,
/// as a percentage in `[0, 100]`.
/// The sample must be non-empty and must have its target column set.
pub fn accuracy<H>(f: &H, sample: &Sample) -> Result<f64, MiniTreesError>
    where H: Classifier
{
    let n_sample = sample.shape().0;
    if n_sample == 0 {
        return Err(MiniTreesError::EmptySample);
    }
    let target = sample.target_index()?;

    let correct = (0..n_sample)
        .filter(|&i| f.predict(sample.at(i)) == sample.value(i, target))
        .count();

    Ok(correct as f64 / n_sample as f64 * 100.0)
}


/// Fraction of misclassified rows of `sample`,
/// i.e., `1 - accuracy / 100`.
pub fn zero_one_loss<H>(f: &H, sample: &Sample) -> Result<f64, MiniTreesError>
    where H: Classifier
{
    accuracy(f, sample).map(|acc| 1.0 - acc / 100.0)
}
