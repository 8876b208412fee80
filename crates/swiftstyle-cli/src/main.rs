//! swiftstyle CLI tool.
//!
//! Usage:
//! ```bash
//! swiftstyle check [OPTIONS] [PATH]
//! swiftstyle cache --cache-path <PATH> [--directories <DIRS>] [--paths <FILES>]
//! swiftstyle list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Style and documentation linter for Swift sources
#[derive(Parser)]
#[command(name = "swiftstyle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Swift files
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude path fragments (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Build or refresh the protocol conformance cache
    Cache {
        /// Path of the cache snapshot
        #[arg(long)]
        cache_path: PathBuf,

        /// Directories to scan when building from scratch, comma-separated
        #[arg(long, value_delimiter = ',')]
        directories: Vec<PathBuf>,

        /// Changed files to rescan, comma-separated
        #[arg(long, value_delimiter = ',')]
        paths: Vec<PathBuf>,
    },

    /// List available rules
    ListRules,
}

/// Output format for check results.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable with colors.
    Text,
    /// JSON for tooling.
    Json,
    /// One line per violation.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("swiftstyle=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swiftstyle=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
        } => commands::check::run(&path, format, exclude, cli.config.as_deref()),
        Commands::Cache {
            cache_path,
            directories,
            paths,
        } => commands::cache::run(&cache_path, &directories, &paths),
        Commands::ListRules => commands::list_rules::run(),
    }
}
