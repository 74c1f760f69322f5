//! TOML session file parser.
//!
//! Loads grading sessions from TOML files and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Assessment, Session};

/// Intermediate TOML structure for parsing session files.
#[derive(Debug, Deserialize)]
struct TomlSessionFile {
    session: TomlSessionHeader,
    #[serde(default)]
    assessments: Vec<TomlAssessment>,
}

#[derive(Debug, Deserialize)]
struct TomlSessionHeader {
    target: f64,
}

#[derive(Debug, Deserialize)]
struct TomlAssessment {
    name: String,
    weight: f64,
    #[serde(default)]
    score: Option<f64>,
}

/// Parse a single TOML file into a `Session`.
pub fn parse_session(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;

    parse_session_str(&content, path)
}

/// Parse a TOML string into a `Session` (useful for testing).
pub fn parse_session_str(content: &str, source_path: &Path) -> Result<Session> {
    let parsed: TomlSessionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    anyhow::ensure!(
        parsed.session.target.is_finite(),
        "{}: target must be a finite number",
        source_path.display()
    );
    for a in &parsed.assessments {
        anyhow::ensure!(
            a.weight.is_finite() && a.score.map_or(true, f64::is_finite),
            "{}: assessment '{}' has a non-finite weight or score",
            source_path.display(),
            a.name
        );
    }

    let assessments = parsed
        .assessments
        .into_iter()
        .map(|a| Assessment {
            name: a.name,
            weight: a.weight,
            score: a.score,
        })
        .collect();

    Ok(Session {
        target: parsed.session.target,
        assessments,
    })
}

/// A warning from session validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The assessment name (if applicable).
    pub assessment: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a session for common input mistakes.
///
/// Weights are deliberately not checked against 100.
pub fn validate_session(session: &Session) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if session.assessments.is_empty() {
        warnings.push(ValidationWarning {
            assessment: None,
            message: "session has no assessments".into(),
        });
    }

    for (i, a) in session.assessments.iter().enumerate() {
        if a.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                assessment: None,
                message: format!("assessment {} has an empty name", i + 1),
            });
        }
    }

    let mut seen = std::collections::HashSet::new();
    for a in &session.assessments {
        if !a.name.trim().is_empty() && !seen.insert(a.name.as_str()) {
            warnings.push(ValidationWarning {
                assessment: Some(a.name.clone()),
                message: format!(
                    "duplicate assessment name: {} (required scores are reported once per name)",
                    a.name
                ),
            });
        }
    }

    warnings
}
