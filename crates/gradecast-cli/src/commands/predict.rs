//! The `gradecast predict` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecast_core::engine::Estimator;
use gradecast_core::parser;
use gradecast_core::predictor::{FallbackReason, ScoreSource};
use gradecast_core::report::SessionReport;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    session_path: PathBuf,
    target: Option<f64>,
    store_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    no_learn: bool,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}', expected text or json"
    );

    let mut session = parser::parse_session(&session_path)?;
    if let Some(target) = target {
        anyhow::ensure!(target.is_finite(), "target must be a finite number");
        session.target = target;
    }
    for w in parser::validate_session(&session) {
        tracing::warn!("{}", w.message);
    }

    let mut config = super::load_settings(store_path, config_path)?;
    if no_learn {
        config.continuous_learning = false;
    }

    let estimator = Estimator::new(config.engine_config());
    let mut store = config.open_store();
    let report = estimator.run(&session, &mut store)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Render a session report for the terminal.
pub(crate) fn print_report(report: &SessionReport) {
    use comfy_table::{Cell, Table};

    println!("--- Required Scores ---");
    if report.required.required.is_empty() {
        println!("{}", report.required.message);
    } else {
        for r in &report.required.required {
            println!(
                "To meet target {}%, you need at least {}% in {}.",
                report.target, r.score, r.name
            );
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["Assessment", "Weight", "Score", "Source"]);
    for p in &report.prediction.scores {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(format!("{}%", p.weight)),
            Cell::new(format!("{}%", p.score)),
            Cell::new(source_label(p.source)),
        ]);
    }

    println!("\n--- Predicted Scores ---");
    println!("{table}");
    println!(
        "{} of {} scores estimated ({} regression models trained).",
        report.prediction.estimated_count(),
        report.prediction.scores.len(),
        report.trained_models
    );
    println!(
        "Predicted Final Grade (Regression): {:.2}%",
        report.prediction.final_grade
    );

    if report.store_updated {
        println!("\nTraining data updated for continuous learning!");
    }
}

fn source_label(source: ScoreSource) -> &'static str {
    match source {
        ScoreSource::Known => "entered",
        ScoreSource::Model => "regression",
        ScoreSource::MeanFallback => "mean of known scores",
        ScoreSource::Fallback(FallbackReason::NoModel) => "default (no training data)",
        ScoreSource::Fallback(FallbackReason::NoFeatures) => "default (no known scores)",
    }
}
