//! Core data model types for gradecast.
//!
//! These are the fundamental types that the entire gradecast system uses
//! to represent a grading session and the historical training data.

use serde::{Deserialize, Serialize};

/// An ordered vector of scores, one per assessment of a session.
pub type ScoreVector = Vec<f64>;

/// A single graded component of a course (exam, assignment, project...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Human-readable name, used as the key of required-score reports.
    pub name: String,
    /// Contribution to the final grade in percentage points.
    pub weight: f64,
    /// Score achieved so far, absent when the assessment is not taken yet.
    #[serde(default)]
    pub score: Option<f64>,
}

impl Assessment {
    pub fn new(name: impl Into<String>, weight: f64, score: Option<f64>) -> Self {
        Self {
            name: name.into(),
            weight,
            score,
        }
    }

    /// Whether a score has been recorded for this assessment.
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

/// A grading session: a target final grade and the assessments of one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Target weighted final grade.
    pub target: f64,
    /// Assessments in positional order.
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Session {
    pub fn new(target: f64, assessments: Vec<Assessment>) -> Self {
        Self {
            target,
            assessments,
        }
    }

    /// Number of assessments, the dimensionality of this session's score vectors.
    pub fn assessment_count(&self) -> usize {
        self.assessments.len()
    }

    /// The full score vector, if every assessment is scored.
    pub fn known_scores(&self) -> Option<ScoreVector> {
        self.assessments.iter().map(|a| a.score).collect()
    }

    /// True when the session has assessments and all of them are scored.
    pub fn is_complete(&self) -> bool {
        !self.assessments.is_empty() && self.assessments.iter().all(Assessment::is_scored)
    }
}

/// One historical observation used to train the per-assessment regressors.
///
/// Serialized as the two-element array `[features, label]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(ScoreVector, ScoreVector)", into = "(ScoreVector, ScoreVector)")]
pub struct TrainingRecord {
    pub features: ScoreVector,
    pub label: ScoreVector,
}

impl TrainingRecord {
    pub fn new(features: ScoreVector, label: ScoreVector) -> Self {
        Self { features, label }
    }

    /// A record whose label is the feature vector itself (a full session snapshot).
    pub fn identity(scores: ScoreVector) -> Self {
        Self {
            features: scores.clone(),
            label: scores,
        }
    }

    /// Whether both vectors carry at least `n` entries.
    pub fn covers(&self, n: usize) -> bool {
        self.features.len() >= n && self.label.len() >= n
    }

    /// Dimensionality of the record (the shorter of its two vectors).
    pub fn dimension(&self) -> usize {
        self.features.len().min(self.label.len())
    }
}

impl From<(ScoreVector, ScoreVector)> for TrainingRecord {
    fn from((features, label): (ScoreVector, ScoreVector)) -> Self {
        Self { features, label }
    }
}

impl From<TrainingRecord> for (ScoreVector, ScoreVector) {
    fn from(record: TrainingRecord) -> Self {
        (record.features, record.label)
    }
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
