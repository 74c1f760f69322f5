//! Fill in missing assessment scores from known scores and trained models.

use serde::{Deserialize, Serialize};

use crate::model::{round2, Assessment};
use crate::trainer::RegressorSlot;
use crate::traits::Regressor;

/// Score used when no model or no co-assessment score is available.
pub const FALLBACK_SCORE: f64 = 70.0;

/// Why the constant fallback score was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The assessment's regressor had no training data.
    NoModel,
    /// None of the other assessments has a score yet.
    NoFeatures,
}

/// Where a predicted score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum ScoreSource {
    /// The score was already recorded.
    Known,
    /// Predicted by the assessment's regressor.
    Model,
    /// The model failed; the mean of the known co-assessment scores was used.
    MeanFallback,
    /// The constant fallback score was used.
    Fallback(FallbackReason),
}

/// The predicted (or known) score for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedScore {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub source: ScoreSource,
}

/// Predicted scores for every assessment plus the resulting final grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// One entry per assessment, in session order.
    pub scores: Vec<PredictedScore>,
    /// Weighted final grade over the predicted scores, rounded to 2 decimals.
    pub final_grade: f64,
}

impl Prediction {
    /// Number of scores that did not come from the session itself.
    pub fn estimated_count(&self) -> usize {
        self.scores
            .iter()
            .filter(|s| s.source != ScoreSource::Known)
            .count()
    }
}

/// Predict every missing score of `assessments` using `slots`.
///
/// `slots` is indexed by assessment position; a missing slot is treated as
/// untrained. Known scores pass through unchanged.
pub fn predict_scores<R: Regressor>(
    assessments: &[Assessment],
    slots: &[RegressorSlot<R>],
    fallback_score: f64,
) -> Prediction {
    let scores: Vec<Option<f64>> = assessments.iter().map(|a| a.score).collect();

    let predicted: Vec<PredictedScore> = assessments
        .iter()
        .enumerate()
        .map(|(i, assessment)| {
            let (score, source) = match assessment.score {
                Some(known) => (known, ScoreSource::Known),
                None => estimate_missing(&scores, i, slots.get(i), fallback_score),
            };
            PredictedScore {
                name: assessment.name.clone(),
                weight: assessment.weight,
                score,
                source,
            }
        })
        .collect();

    let final_grade = round2(
        predicted
            .iter()
            .map(|p| p.score * p.weight / 100.0)
            .sum::<f64>(),
    );

    Prediction {
        scores: predicted,
        final_grade,
    }
}

fn estimate_missing<R: Regressor>(
    scores: &[Option<f64>],
    index: usize,
    slot: Option<&RegressorSlot<R>>,
    fallback_score: f64,
) -> (f64, ScoreSource) {
    let model = match slot {
        Some(RegressorSlot::Trained(model)) => model,
        Some(RegressorSlot::Untrained) | None => {
            return (fallback_score, ScoreSource::Fallback(FallbackReason::NoModel));
        }
    };

    let known: Vec<f64> = scores
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .filter_map(|(_, s)| *s)
        .collect();
    if known.is_empty() {
        return (
            fallback_score,
            ScoreSource::Fallback(FallbackReason::NoFeatures),
        );
    }
    let avg = known.iter().sum::<f64>() / known.len() as f64;

    // Other assessments still missing a score are imputed with the mean.
    let input: Vec<f64> = scores
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .map(|(_, s)| s.unwrap_or(avg))
        .collect();

    match model.predict(&input) {
        Ok(value) => (round2(value), ScoreSource::Model),
        Err(e) => {
            tracing::debug!("model for assessment {index} failed ({e}), using mean {avg}");
            (round2(avg), ScoreSource::MeanFallback)
        }
    }
}
