//! The `gradecast init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradecast.toml
    if std::path::Path::new("gradecast.toml").exists() {
        println!("gradecast.toml already exists, skipping.");
    } else {
        std::fs::write("gradecast.toml", SAMPLE_CONFIG)?;
        println!("Created gradecast.toml");
    }

    // Create example session
    std::fs::create_dir_all("sessions")?;
    let example_path = std::path::Path::new("sessions/example.toml");
    if example_path.exists() {
        println!("sessions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SESSION)?;
        println!("Created sessions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit sessions/example.toml with your assessments and scores");
    println!("  2. Run: gradecast validate --session sessions/example.toml");
    println!("  3. Run: gradecast predict --session sessions/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradecast configuration

# Where completed sessions are stored for continuous learning.
store_path = "training_data.json"

# Seed data used before enough history exists: synthesized, reference, none.
# "reference" seeds only 2- and 3-assessment sessions; other sizes use
# fallback_score until history accumulates.
seed_policy = "synthesized"

# Score assumed when nothing better can be predicted.
fallback_score = 70.0

# Add fully scored sessions to the training data.
continuous_learning = true
"#;

const EXAMPLE_SESSION: &str = r#"[session]
target = 75.0

[[assessments]]
name = "Quiz"
weight = 20
score = 68

[[assessments]]
name = "Midterm"
weight = 30
score = 74.5

[[assessments]]
name = "Final"
weight = 50
# Leave out `score` until the assessment is taken.
"#;
