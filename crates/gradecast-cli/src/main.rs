//! The `gradecast` command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "gradecast",
    version,
    about = "Grade target planner with continuous-learning score prediction"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict missing scores and required scores for a session file
    Predict {
        /// Path to the .toml session file
        #[arg(long)]
        session: PathBuf,

        /// Override the target final grade from the session file
        #[arg(long)]
        target: Option<f64>,

        /// Training data file (overrides the config)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the full report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Do not add a completed session to the training data
        #[arg(long)]
        no_learn: bool,
    },

    /// Enter a session interactively
    Interactive {
        /// Training data file (overrides the config)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a session file
    Validate {
        /// Path to the .toml session file
        #[arg(long)]
        session: PathBuf,
    },

    /// Summarize the stored training data
    History {
        /// Training data file (overrides the config)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example session
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradecast=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            session,
            target,
            store,
            config,
            format,
            output,
            no_learn,
        } => commands::predict::execute(session, target, store, config, format, output, no_learn),
        Commands::Interactive { store, config } => commands::interactive::execute(store, config),
        Commands::Validate { session } => commands::validate::execute(session),
        Commands::History { store, config } => commands::history::execute(store, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
