//! Error types for MiniTrees operations.
//!
//! The induction core itself never fails:
//! empty data, unresolvable splits, and unseen feature values
//! all degrade to leaf values.
//! Everything a caller can misconfigure at the boundary
//! is surfaced through [`MiniTreesError`].
use thiserror::Error;


/// The error type returned by the fallible operations of this crate.
#[derive(Debug, Error)]
pub enum MiniTreesError {
    /// The metric name is not one of `gini`, `info`, or `gain`.
    #[error("unknown metric name `{0}`. expected one of `gini`, `info`, or `gain`")]
    UnknownMetric(String),


    /// The requested target column does not appear in the attribute names.
    #[error("the target column `{0}` does not exist")]
    TargetNotFound(String),


    /// An operation that needs the target column was called
    /// before the target column was set.
    #[error(
        "the target column is not set. \
         use `Sample::set_target` or `SampleReader::target_feature`"
    )]
    TargetNotSet,


    /// A row length differs from the attribute-name count.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// The attribute-name count.
        expected: usize,
        /// The cell count actually found.
        found: usize,
    },


    /// The number of attribute names differs from the column count.
    #[error("{n_names} attribute names were given for {n_columns} columns")]
    NameCountMismatch {
        /// The number of attribute names given.
        n_names: usize,
        /// The number of columns in the data.
        n_columns: usize,
    },


    /// The training fraction lies outside the open interval `(0, 1)`.
    #[error("the train ratio must lie in the open interval (0, 1), got {0}")]
    InvalidTrainRatio(f64),


    /// An empty sample was passed to an operation that needs rows.
    #[error("the sample has no rows")]
    EmptySample,


    /// [`SampleReader::read`](crate::SampleReader::read) was called
    /// without a file name.
    #[error("no input file is set. use `SampleReader::file`")]
    NoInputFile,


    /// An I/O failure while reading or writing a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),


    /// A `polars::DataFrame` could not be converted into a `Sample`.
    #[error("dataframe conversion failed: {0}")]
    DataFrame(String),


    /// A model could not be written to or restored from JSON.
    #[error("model (de)serialization failed: {0}")]
    Json(String),
}
