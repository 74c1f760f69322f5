//! JSON file training store.
//!
//! The file holds a JSON array of `[features, label]` pairs. A missing file
//! is an empty store; saving always rewrites the whole file.

use std::path::{Path, PathBuf};

use gradecast_core::model::TrainingRecord;
use gradecast_core::traits::TrainingStore;

use crate::error::StoreError;

/// Training store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records, or an empty vector if the file does not exist.
    pub fn read_records(&self) -> Result<Vec<TrainingRecord>, StoreError> {
        if !self.path.exists() {
            tracing::debug!("no training data at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `records`, creating parent directories as needed.
    pub fn write_records(&self, records: &[TrainingRecord]) -> Result<(), StoreError> {
        if let Some(record) = records.iter().position(|r| {
            !r.features.iter().chain(&r.label).all(|v| v.is_finite())
        }) {
            return Err(StoreError::NonFinite {
                path: self.path.clone(),
                record,
            });
        }
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string(records).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(write_err)
    }
}

impl TrainingStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Vec<TrainingRecord>> {
        Ok(self.read_records()?)
    }

    fn save(&mut self, records: &[TrainingRecord]) -> anyhow::Result<()> {
        Ok(self.write_records(records)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
