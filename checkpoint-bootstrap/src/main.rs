use anyhow::Result;
use clap::{Parser, Subcommand};

use checkpoint_bootstrap::{init_tracing, run_evaluate, run_review};
use checkpoint_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "checkpoint")]
#[command(about = "Campus checkpoint item screening", long_about = None)]
#[command(version)]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every item of an intake file without touching the item log
    Evaluate {
        /// Intake file (.yaml, .yml or .json)
        file: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load the configured intake file and review the evaluation queue
    Review {
        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Append counters in Prometheus text format
        #[arg(long)]
        metrics: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path).await?,
        None => AppConfig::load().await?,
    };
    let _guard = init_tracing(&config)?;

    let output = match args.command {
        Command::Evaluate { file, json } => run_evaluate(&file, json).await?,
        Command::Review { json, metrics } => run_review(&config, json, metrics).await?,
    };
    println!("{}", output);
    Ok(())
}
