//! Train/test splitting and cross validation
//! over categorical samples.
use rand::prelude::*;
use colored::Colorize;

use crate::error::MiniTreesError;
use crate::sample::Sample;


const WIDTH: usize = 9;


/// The training fraction set as default.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.7;


/// Split `sample` into a `(train, test)` pair by a seeded
/// random shuffle.
/// `train_ratio` is the fraction of rows that go into the
/// training sample and must lie in the open interval `(0, 1)`;
/// see [`DEFAULT_TRAIN_RATIO`].
/// The same seed always produces the same split.
pub fn train_test_split(sample: &Sample, train_ratio: f64, seed: u64)
    -> Result<(Sample, Sample), MiniTreesError>
{
    if !(0.0 < train_ratio && train_ratio < 1.0) {
        return Err(MiniTreesError::InvalidTrainRatio(train_ratio));
    }

    let n_sample = sample.shape().0;
    let mut ix = (0..n_sample).collect::<Vec<usize>>();

    let mut rng = StdRng::seed_from_u64(seed);
    ix.shuffle(&mut rng);

    let train_size = (n_sample as f64 * train_ratio) as usize;
    let train = sample.subset(&ix[..train_size]);
    let test = sample.subset(&ix[train_size..]);

    Ok((train, test))
}


/// A struct that generates
/// pairs of training/test samples for cross validation.
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .seed(777)
///     .verbose(true)
///     .shuffle();
///
/// for (train, test) in cv {
///     let tree = DecisionTreeBuilder::new()
///         .max_depth(4)
///         .build();
///     let f = tree.fit(&train).unwrap();
///
///     println!(
///         "[train: {:.2}] [test: {:.2}]",
///         zero_one_loss(&f, &train).unwrap(),
///         zero_one_loss(&f, &test).unwrap(),
///     );
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least 2 folds");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the rows with the current seed.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    /// The shuffled rows are cut into `n_folds` chunks;
    /// chunk `i` becomes the test sample and the rest the training one.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let n_sample = self.ix.len();
        let chunk = (n_sample + self.n_folds - 1) / self.n_folds;
        let (start, end) = (i * chunk, (i + 1) * chunk);
        self.sample.split_at_indices(&self.ix[..], start, end)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
