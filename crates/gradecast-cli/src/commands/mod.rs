pub mod history;
pub mod init;
pub mod interactive;
pub mod predict;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradecast_store::{load_config_from, GradecastConfig};

/// Load the config and apply a `--store` override.
fn load_settings(store: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<GradecastConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(store) = store {
        config.store_path = store;
    }
    Ok(config)
}
