//! Required-score calculation.
//!
//! Computes the single score that, achieved on every incomplete assessment,
//! brings the weighted final grade up to the target.

use serde::{Deserialize, Serialize};

use crate::model::{round2, Assessment};

/// Outcome category of a required-score calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    /// Every assessment is scored and the target is reached.
    TargetMet,
    /// Every assessment is scored and the target is missed.
    TargetNotMet,
    /// The required score exceeds 100.
    Unreachable,
    /// A required score within reach was computed.
    Achievable,
}

impl RequirementStatus {
    /// User-facing status message.
    pub fn message(&self) -> &'static str {
        match self {
            RequirementStatus::TargetMet => "All assessments completed. Target met.",
            RequirementStatus::TargetNotMet => "All assessments completed. Target not met.",
            RequirementStatus::Unreachable => "Target is unreachable with remaining assessments.",
            RequirementStatus::Achievable => "Calculated required scores successfully.",
        }
    }
}

/// The score required on one incomplete assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredScore {
    pub name: String,
    pub score: f64,
}

/// Result of [`required_scores`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredScoreReport {
    pub status: RequirementStatus,
    pub message: String,
    /// Required score per incomplete assessment, in assessment order.
    /// Empty unless `status` is [`RequirementStatus::Achievable`].
    pub required: Vec<RequiredScore>,
}

impl RequiredScoreReport {
    fn with_status(status: RequirementStatus, required: Vec<RequiredScore>) -> Self {
        Self {
            status,
            message: status.message().to_string(),
            required,
        }
    }

    /// Look up the required score for an assessment by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.required
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.score)
    }
}

/// Compute the uniform score needed on all incomplete assessments to reach `target`.
///
/// Every incomplete assessment receives the same value regardless of its own
/// weight. Never fails: degenerate inputs map to a status.
pub fn required_scores(target: f64, assessments: &[Assessment]) -> RequiredScoreReport {
    let mut known_score = 0.0;
    let mut remaining_weight = 0.0;
    let mut remaining = Vec::new();

    for a in assessments {
        match a.score {
            Some(score) => known_score += score * a.weight / 100.0,
            None => {
                remaining_weight += a.weight;
                remaining.push(a);
            }
        }
    }

    if remaining_weight == 0.0 {
        let status = if target <= known_score {
            RequirementStatus::TargetMet
        } else {
            RequirementStatus::TargetNotMet
        };
        return RequiredScoreReport::with_status(status, Vec::new());
    }

    let needed = target - known_score;
    let required = needed * 100.0 / remaining_weight;
    if required > 100.0 {
        return RequiredScoreReport::with_status(RequirementStatus::Unreachable, Vec::new());
    }

    let score = round2(required);
    let mut entries: Vec<RequiredScore> = Vec::with_capacity(remaining.len());
    for a in remaining {
        if !entries.iter().any(|e| e.name == a.name) {
            entries.push(RequiredScore {
                name: a.name.clone(),
                score,
            });
        }
    }
    RequiredScoreReport::with_status(RequirementStatus::Achievable, entries)
}
