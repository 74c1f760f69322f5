//! The `gradecast interactive` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use gradecast_core::engine::Estimator;
use gradecast_core::model::{Assessment, Session};

pub fn execute(store_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_settings(store_path, config_path)?;

    println!("--- Student Grade Predictor (Continuous Learning Mode) ---");
    let stdin = io::stdin();
    let session = collect_session(&mut stdin.lock(), &mut io::stdout())?;

    let estimator = Estimator::new(config.engine_config());
    let mut store = config.open_store();
    let report = estimator.run(&session, &mut store)?;

    println!();
    super::predict::print_report(&report);
    Ok(())
}

/// Prompt for a target and the assessments of one session.
pub(crate) fn collect_session<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Session> {
    let target = parse_number(
        &prompt(input, out, "Enter your target final grade (e.g., 75): ")?,
        "target grade",
    )?;
    let count: usize = parse_field(
        &prompt(input, out, "Enter number of assessments: ")?,
        "number of assessments",
    )?;

    let mut assessments = Vec::new();
    for i in 0..count {
        let name = prompt(input, out, &format!("Enter name of assessment {}: ", i + 1))?;
        let weight = parse_number(
            &prompt(input, out, &format!("Enter weight of {name} (%): "))?,
            "weight",
        )?;
        let raw_score = prompt(
            input,
            out,
            &format!("Enter score in {name} (or leave blank if not done): "),
        )?;
        let score = if raw_score.is_empty() {
            None
        } else {
            Some(parse_number(&raw_score, "score")?)
        };
        assessments.push(Assessment::new(name, weight, score));
    }

    Ok(Session::new(target, assessments))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    anyhow::ensure!(read > 0, "unexpected end of input");
    Ok(line.trim().to_string())
}

fn parse_number(raw: &str, what: &str) -> Result<f64> {
    let value: f64 = parse_field(raw, what)?;
    anyhow::ensure!(value.is_finite(), "invalid {what}: '{raw}'");
    Ok(value)
}

fn parse_field<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid {what}: '{raw}'"))
}
