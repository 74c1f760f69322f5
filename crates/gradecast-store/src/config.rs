//! gradecast configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gradecast_core::engine::EngineConfig;
use gradecast_core::predictor::FALLBACK_SCORE;
use gradecast_core::seed::SeedPolicy;

use crate::json_file::JsonFileStore;

/// Top-level gradecast configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradecastConfig {
    /// Path of the JSON training data file.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// How seed training data is produced.
    ///
    /// `synthesized` (the default) seeds any number of assessments, so a
    /// fresh store still gets regression predictions. `reference` seeds only
    /// two- and three-assessment sessions; every other size falls back to
    /// `fallback_score` until real history accumulates.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Score used when nothing better can be predicted.
    #[serde(default = "default_fallback_score")]
    pub fallback_score: f64,
    /// Append completed sessions to the training data.
    #[serde(default = "default_true")]
    pub continuous_learning: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("training_data.json")
}
fn default_fallback_score() -> f64 {
    FALLBACK_SCORE
}
fn default_true() -> bool {
    true
}

impl Default for GradecastConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            seed_policy: SeedPolicy::default(),
            fallback_score: default_fallback_score(),
            continuous_learning: true,
        }
    }
}

impl GradecastConfig {
    /// The engine settings carried by this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            seed_policy: self.seed_policy,
            fallback_score: self.fallback_score,
            continuous_learning: self.continuous_learning,
        }
    }

    /// Open the configured training store.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.store_path)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration, falling back to defaults when no file is found.
///
/// Search order:
/// 1. `path`, when given (it must exist)
/// 2. `gradecast.toml` in the current directory
/// 3. `~/.config/gradecast/config.toml`
///
/// Environment variable override: `GRADECAST_STORE_PATH`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecastConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecast.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GradecastConfig::default(),
    };

    if let Ok(store_path) = std::env::var("GRADECAST_STORE_PATH") {
        config.store_path = PathBuf::from(store_path);
    }

    Ok(config)
}

/// Parse a TOML config string, expanding `${VAR}` references in `store_path`.
pub fn parse_config(content: &str) -> Result<GradecastConfig> {
    let mut config: GradecastConfig = toml::from_str(content)?;
    let raw = config.store_path.to_string_lossy().into_owned();
    config.store_path = PathBuf::from(resolve_env_vars(&raw));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecast"))
}
