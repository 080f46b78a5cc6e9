//! Lectern CLI - lecture markdown to slides and speaker notes.
//!
//! Provides commands for:
//! - `split`: Split an annotated lecture into slides and notes files
//! - `check`: Report directive diagnostics without writing anything

mod commands;
mod config;
mod error;
mod front_matter;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, SplitArgs};
use output::Output;

/// Lectern - lecture markdown splitter.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable info-level logging.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a lecture file into slides and notes markdown.
    Split(SplitArgs),
    /// Check a lecture file for directive problems.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Split(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
