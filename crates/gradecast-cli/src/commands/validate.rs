//! The `gradecast validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(session_path: PathBuf) -> Result<()> {
    let session = gradecast_core::parser::parse_session(&session_path)?;

    let scored = session.assessments.iter().filter(|a| a.is_scored()).count();
    println!(
        "Session: target {}% ({} assessments, {} scored)",
        session.target,
        session.assessment_count(),
        scored
    );

    if session.is_complete() {
        println!("  All assessments scored; `predict` will add this session to the training data.");
    }

    let warnings = gradecast_core::parser::validate_session(&session);
    for w in &warnings {
        let prefix = w
            .assessment
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Session valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
