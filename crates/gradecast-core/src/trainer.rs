//! Per-assessment regression training with leave-one-out features.
//!
//! For assessment `i`, every qualifying record contributes one row: the
//! record's label with position `i` removed is the input, the value at `i`
//! is the target.

use crate::model::TrainingRecord;
use crate::regression::LinearModel;
use crate::traits::Regressor;

/// The model slot for one assessment index.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressorSlot<R = LinearModel> {
    /// No qualifying training rows (or the fit failed).
    Untrained,
    /// A fitted model over the other `n - 1` assessments.
    Trained(R),
}

impl<R> RegressorSlot<R> {
    pub fn is_trained(&self) -> bool {
        matches!(self, RegressorSlot::Trained(_))
    }

    pub fn model(&self) -> Option<&R> {
        match self {
            RegressorSlot::Trained(model) => Some(model),
            RegressorSlot::Untrained => None,
        }
    }
}

/// Count the trained slots.
pub fn trained_count<R>(slots: &[RegressorSlot<R>]) -> usize {
    slots.iter().filter(|s| s.is_trained()).count()
}

/// Build the leave-one-out rows and targets for assessment `index` of an
/// `n`-assessment session.
///
/// Records shorter than `n` are skipped; longer records are truncated to
/// their first `n` entries.
pub fn training_rows(
    dataset: &[TrainingRecord],
    n: usize,
    index: usize,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rows = Vec::new();
    let mut targets = Vec::new();
    for record in dataset.iter().filter(|r| r.covers(n)) {
        let label = &record.label[..n];
        rows.push(
            label
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != index)
                .map(|(_, v)| *v)
                .collect(),
        );
        targets.push(label[index]);
    }
    (rows, targets)
}

/// Train one regressor per assessment index in `0..n`.
pub fn train_regressors(dataset: &[TrainingRecord], n: usize) -> Vec<RegressorSlot> {
    (0..n)
        .map(|index| {
            let (rows, targets) = training_rows(dataset, n, index);
            if rows.is_empty() {
                tracing::debug!("no training rows for assessment {index}");
                return RegressorSlot::Untrained;
            }
            match LinearModel::fit(&rows, &targets) {
                Ok(model) => {
                    tracing::debug!(
                        "assessment {index}: fitted on {} rows with {} inputs",
                        rows.len(),
                        model.input_len()
                    );
                    RegressorSlot::Trained(model)
                }
                Err(e) => {
                    tracing::debug!("fit failed for assessment {index}: {e}");
                    RegressorSlot::Untrained
                }
            }
        })
        .collect()
}
