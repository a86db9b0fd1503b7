use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nongli Gregorian-to-lunar date converter.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Convert Gregorian dates to traditional Chinese lunar dates"
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
    /// Convert a single date.
    Convert(ConvertArgs),
    /// Convert dates read line by line from a file or stdin.
    Batch(BatchArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date in YYYY-MM-DD format.
    pub date: String,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to a file with one date per line; stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
