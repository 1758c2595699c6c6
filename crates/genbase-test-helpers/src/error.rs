use thiserror::Error;

use crate::math::ShapeError;

/// Failures raised by label encoding and the classifier adapters.
///
/// Errors produced by an injected prediction function are not represented
/// here; they are returned to the caller as they were raised.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("label {0} is not part of the target labels")]
    UnknownLabel(String),

    #[error("no label is assigned to column {0}")]
    UnknownColumn(usize),

    #[error("the target label set must contain at least one label")]
    EmptyLabelSet,

    #[error("label {0} occurs more than once in the target labels")]
    DuplicateLabel(String),

    #[error("batch size must be a positive integer, got {0}")]
    InvalidBatchSize(usize),

    #[error(
        "prediction matrix has shape ({rows}, {cols}) but the batch needs ({expected_rows}, {expected_cols})"
    )]
    PredictionShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Failures raised while assembling an in-memory dataset.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("{field} has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("instance key {0} occurs more than once")]
    DuplicateKey(String),

    #[error("ground truth label {0} is not one of the target labels")]
    UnknownLabel(String),
}
