// crates/skysift/src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{export, plot, scan, select};

/// A CLI for filtering alert catalogs down to fast-evolving transients
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the alert-table filter chain and print the selection summary.
    Select(select::SelectArgs),
    /// Filter, then flag fast-evolving candidates from their light curves.
    Scan(scan::ScanArgs),
    /// Render light-curve plots for flagged candidates.
    Plot(plot::PlotArgs),
    /// Write the flagged candidates to a CSV file.
    Export(export::ExportArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Select(args) => select::run(args),
        Commands::Scan(args) => scan::run(args),
        Commands::Plot(args) => plot::run(args),
        Commands::Export(args) => export::run(args),
    }
}
