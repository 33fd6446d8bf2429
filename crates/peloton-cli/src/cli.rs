//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use peloton::SelectionStrategy;

/// Season roster planning: rank riders, pick the optimal team, plan captains.
///
/// Riders are read from a JSON array of competitor records. Events default
/// to the built-in spring classics catalog.
///
/// Examples:
///   peloton rank --riders riders.json --by value --limit 10
///   peloton optimize --riders riders.json --budget 48000000 --include 12,40
#[derive(Parser, Debug)]
#[command(name = "peloton")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the top riders by projected points or value
    Rank(RankArgs),
    /// Select the optimal roster and plan captaincy
    Optimize(OptimizeArgs),
}

/// Where the competitor table and event catalog come from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file with an array of competitor records
    #[arg(long, value_name = "FILE")]
    pub riders: PathBuf,

    /// JSON file with an array of events; the classics catalog when omitted
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Ranking key
    #[arg(long, value_enum, default_value_t = RankBy::Points)]
    pub by: RankBy,

    /// Number of riders to list
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Total projected points
    Points,
    /// Projected points per million
    Value,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// TOML planner configuration; flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Budget in whole currency units
    #[arg(long)]
    pub budget: Option<u64>,

    /// Number of riders on the roster
    #[arg(long)]
    pub team_size: Option<usize>,

    /// Rider ids that must be selected
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub include: Vec<u64>,

    /// Rider ids that must not be selected
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub exclude: Vec<u64>,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    pub time_limit_secs: Option<u64>,

    /// Exact search strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Auto,
    BranchAndBound,
    PriceBuckets,
}

impl From<StrategyArg> for SelectionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => SelectionStrategy::Auto,
            StrategyArg::BranchAndBound => SelectionStrategy::BranchAndBound,
            StrategyArg::PriceBuckets => SelectionStrategy::PriceBuckets,
        }
    }
}
