//! Estimation error types.
//!
//! Neither error escapes the engine: a fit failure leaves an assessment's
//! regressor untrained and a prediction failure degrades to the mean of the
//! known co-assessment scores. They are typed so callers can tell the two
//! conditions apart in logs and tests.

use thiserror::Error;

/// Errors raised while fitting a regression model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// No training rows were supplied.
    #[error("no training rows")]
    EmptyDataset,

    /// The number of rows and targets differ.
    #[error("{rows} training rows but {targets} targets")]
    LengthMismatch { rows: usize, targets: usize },

    /// Rows have different lengths.
    #[error("training row {row} has {actual} features, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A feature or target is NaN or infinite.
    #[error("training data contains a non-finite value")]
    NonFinite,
}

/// Errors raised when invoking a fitted model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The input vector does not match the model's feature count.
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The input or the resulting prediction is NaN or infinite.
    #[error("prediction is not a finite number")]
    NonFinite,
}
