//! Errors
//!
//! Custom error types used throughout the `minitrees` crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use crate::sample::FeatureKind;

/// Errors that can occur while training a tree or predicting with it.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Error raised by `polars` while reading a column.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    /// The column type is neither numeric, string, nor boolean.
    #[error("Column `{column}` has dtype {dtype}, which is neither numeric nor categorical.")]
    UnsupportedDtype {
        /// Column name.
        column: String,
        /// Printed dtype of the column.
        dtype: String,
    },
    /// Missing values are not supported.
    #[error("Column `{0}` contains a null value.")]
    NullValue(String),
    /// A NaN cannot be compared against a threshold.
    #[error("Column `{0}` contains a NaN value.")]
    NanValue(String),
    /// The attributes and the target do not share the same row count.
    #[error("The dataset has {rows} rows, but the target has {target} rows.")]
    ShapeMismatch {
        /// Rows of the attribute table.
        rows: usize,
        /// Rows of the target column.
        target: usize,
    },
    /// Training requires at least one row.
    #[error("Cannot train a tree on an empty sample.")]
    EmptySample,
    /// Two attribute columns share the same name.
    #[error("Column `{0}` appears more than once.")]
    DuplicateColumn(String),
    /// The requested row does not exist in the frame.
    #[error("Row {row} is out of bounds for a frame of {rows} rows.")]
    RowOutOfBounds {
        /// Requested row.
        row: usize,
        /// Height of the frame.
        rows: usize,
    },
    /// Prediction was requested before `train` or `fit`.
    #[error("The tree has not been trained yet.")]
    NotTrained,
    /// The prediction row references a column the tree was not trained on.
    #[error("Column `{0}` was not part of the training data.")]
    UnknownColumn(String),
    /// The prediction row holds a value of the wrong kind.
    #[error("Column `{column}` is {expected} in the training data, but a {found} value was given.")]
    KindMismatch {
        /// Column name.
        column: String,
        /// Kind seen at training time.
        expected: FeatureKind,
        /// Kind of the offending value.
        found: FeatureKind,
    },
    /// An internal node ended up without any branch.
    #[error("Node splitting on `{0}` has no branch.")]
    MalformedNode(String),
}

/// Result type with [`TreeError`] as the error.
pub type Result<T> = std::result::Result<T, TreeError>;
