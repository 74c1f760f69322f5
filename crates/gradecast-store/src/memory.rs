//! In-memory training store for tests.

use gradecast_core::model::TrainingRecord;
use gradecast_core::traits::TrainingStore;

/// A training store that keeps records in memory and counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<TrainingRecord>,
    save_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<TrainingRecord>) -> Self {
        Self {
            records,
            save_count: 0,
        }
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> u32 {
        self.save_count
    }
}

impl TrainingStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Vec<TrainingRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[TrainingRecord]) -> anyhow::Result<()> {
        self.records = records.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
