//! Grove CLI entry point

use clap::{Parser, Subcommand};
use grove_core::AggregationKey;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "Structural queries over flat file-record snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./grove.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List records that are nobody's parent
    Leaves {
        /// Snapshot file (.json, .yaml, .yml or .toml)
        snapshot: PathBuf,
    },
    /// List the most frequent category labels
    Categories {
        snapshot: PathBuf,

        /// Number of labels to show
        #[arg(short)]
        k: Option<usize>,
    },
    /// Print the largest total size accumulated under a single root
    Largest {
        snapshot: PathBuf,

        /// Group roots by `id` or `name`
        #[arg(long)]
        by: Option<AggregationKey>,
    },
    /// Print a JSON report for one or more snapshots
    Report {
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,

        #[arg(short)]
        k: Option<usize>,

        #[arg(long)]
        by: Option<AggregationKey>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries query results.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "grove={log_level},grove_core={log_level},grove_ingest={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Grove v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Leaves { snapshot } => commands::leaves(&snapshot),
        Commands::Categories { snapshot, k } => {
            commands::categories(&snapshot, k.unwrap_or(config.top_k))
        }
        Commands::Largest { snapshot, by } => {
            commands::largest(&snapshot, by.unwrap_or(config.aggregate_by))
        }
        Commands::Report { snapshots, k, by } => commands::report(
            &snapshots,
            k.unwrap_or(config.top_k),
            by.unwrap_or(config.aggregate_by),
        ),
        Commands::Version => {
            println!("Grove v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
