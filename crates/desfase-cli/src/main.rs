//! Desfase CLI - offline audio diagnostics.
//!
//! Three orchestrators over the analysis core (`analyze`, `downsample`,
//! `translate`) plus fixture helpers (`info`, `generate`). Each run
//! performs exactly one operation; results land in `./results/`.

mod commands;
mod plot;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "desfase")]
#[command(author, version, about = "Offline audio lag and resampling diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the time lag between two recordings via cross-correlation
    Analyze(commands::analyze::AnalyzeArgs),

    /// Reduce a recording's sample rate
    Downsample(commands::downsample::DownsampleArgs),

    /// Translate a recording between the WAV and numeric-table containers
    Translate(commands::translate::TranslateArgs),

    /// Display container metadata without loading samples
    Info(commands::info::InfoArgs),

    /// Generate WAV test fixtures
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Downsample(args) => commands::downsample::run(args),
        Commands::Translate(args) => commands::translate::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
