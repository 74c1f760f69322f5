//! Store error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing persisted training data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("failed to read training data from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file could not be written.
    #[error("failed to write training data to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a list of `[features, label]` pairs.
    #[error("malformed training data in {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record holds NaN or an infinity, which JSON cannot represent.
    #[error("refusing to write non-finite scores to {path} (record {record})")]
    NonFinite { path: PathBuf, record: usize },
}

impl StoreError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Read { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Malformed { path, .. }
            | StoreError::NonFinite { path, .. } => path,
        }
    }
}
