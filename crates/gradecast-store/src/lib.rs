//! gradecast-store: Training data persistence and configuration.

pub mod config;
pub mod error;
pub mod json_file;
pub mod memory;

pub use config::{load_config_from, GradecastConfig};
pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
