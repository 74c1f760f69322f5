//! Core trait definitions for training stores and regression models.
//!
//! Stores are implemented by the `gradecast-store` crate; `LinearModel` in
//! [`crate::regression`] is the regressor the trainer produces.

use crate::error::PredictionError;
use crate::model::TrainingRecord;

// ---------------------------------------------------------------------------
// Training store trait
// ---------------------------------------------------------------------------

/// Durable, append-only collection of historical training records.
///
/// The engine reads the whole collection once per run and writes it back
/// wholesale; stores never see partial updates or deletions.
pub trait TrainingStore {
    /// Load every stored record. A store with no prior data yields an empty vector.
    fn load(&self) -> anyhow::Result<Vec<TrainingRecord>>;

    /// Overwrite the persisted collection with `records`.
    fn save(&mut self, records: &[TrainingRecord]) -> anyhow::Result<()>;

    /// Short description used in log lines (e.g. a file path).
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// Regressor trait
// ---------------------------------------------------------------------------

/// A fitted model mapping the scores of the other assessments to one score.
pub trait Regressor {
    /// Number of features the model expects.
    fn input_len(&self) -> usize;

    /// Predict a score. Failures are returned, never panicked.
    fn predict(&self, input: &[f64]) -> Result<f64, PredictionError>;
}
