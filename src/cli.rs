use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spillover multiplex-network dynamics analyzer.
#[derive(Parser)]
#[command(
    name = "spillover",
    version,
    about = "Dynamical spillover analysis for two-layer multiplex networks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate transition parameters for each count vector.
    Estimate(EstimateArgs),
    /// Compare observed joint dynamics against the independence null model.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to the JSON counts file (one vector, or an array of vectors).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the JSON counts file (one 16-entry vector, or an array of them).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
