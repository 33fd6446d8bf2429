//! peloton - season roster planning from the command line
//!
//! Loads a JSON competitor table, scores it against the event catalog and
//! either ranks riders or selects the optimal roster with its captaincy
//! plan. Logging goes to stderr and is controlled by `RUST_LOG`.

mod cli;
mod commands;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match &cli.command {
        Command::Rank(args) => commands::rank(args),
        Command::Optimize(args) => commands::optimize(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
