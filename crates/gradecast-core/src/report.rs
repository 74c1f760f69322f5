//! Session report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Assessment;
use crate::predictor::Prediction;
use crate::required::RequiredScoreReport;

/// Everything one estimation run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Target final grade.
    pub target: f64,
    /// The session's assessments as entered.
    pub assessments: Vec<Assessment>,
    /// Required scores on the incomplete assessments.
    pub required: RequiredScoreReport,
    /// Predicted scores and final grade.
    pub prediction: Prediction,
    /// Number of assessments with a trained regressor.
    pub trained_models: usize,
    /// Historical records available before this run.
    pub history_records: usize,
    /// Whether the session was appended to the training store.
    pub store_updated: bool,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
