//! Configuration system for Peloton.
//!
//! Load selection defaults, the search strategy and termination limits
//! from TOML or YAML without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use peloton_config::{PelotonConfig, SelectionStrategy};
//! use std::time::Duration;
//!
//! let config = PelotonConfig::from_toml_str(r#"
//!     strategy = "branch_and_bound"
//!
//!     [selection]
//!     budget = 48_000_000
//!     team_size = 20
//!     include = [101, 202]
//!
//!     [termination]
//!     seconds_spent_limit = 30
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, SelectionStrategy::BranchAndBound);
//! assert_eq!(config.selection.budget, 48_000_000);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use peloton_config::PelotonConfig;
//!
//! let config = PelotonConfig::load("peloton.toml").unwrap_or_default();
//! assert_eq!(config.selection.team_size, 20);
//! ```

use std::path::Path;
use std::time::Duration;

use peloton_core::CompetitorId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default budget in whole currency units.
pub const DEFAULT_BUDGET: u64 = 50_000_000;

/// Default number of roster members.
pub const DEFAULT_TEAM_SIZE: usize = 20;

/// Default cap on the price-bucket decision table, in cells.
pub const DEFAULT_PRICE_BUCKET_CELL_LIMIT: u64 = 64_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PelotonConfig {
    /// Roster constraints.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Exact search strategy for roster selection.
    #[serde(default)]
    pub strategy: SelectionStrategy,

    /// Largest price-bucket table `auto` will build before switching to
    /// branch and bound.
    #[serde(default = "default_cell_limit")]
    pub price_bucket_cell_limit: u64,

    /// Caller-imposed limits on the search.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_cell_limit() -> u64 {
    DEFAULT_PRICE_BUCKET_CELL_LIMIT
}

impl Default for PelotonConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            strategy: SelectionStrategy::default(),
            price_bucket_cell_limit: DEFAULT_PRICE_BUCKET_CELL_LIMIT,
            termination: None,
        }
    }
}

impl PelotonConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would make every selection infeasible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.team_size == 0 {
            return Err(ConfigError::Invalid("team_size must be at least 1".into()));
        }
        if self.selection.budget == 0 {
            return Err(ConfigError::Invalid("budget must be positive".into()));
        }
        if self.price_bucket_cell_limit == 0 {
            return Err(ConfigError::Invalid(
                "price_bucket_cell_limit must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.selection.budget = budget;
        self
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.selection.team_size = team_size;
        self
    }

    pub fn with_include(mut self, id: impl Into<CompetitorId>) -> Self {
        self.selection.include.push(id.into());
        self
    }

    pub fn with_exclude(mut self, id: impl Into<CompetitorId>) -> Self {
        self.selection.exclude.push(id.into());
        self
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the termination time limit.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_time_limit_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the explored-node limit.
    pub fn with_node_count_limit(mut self, nodes: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(nodes),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the explored-node limit, if configured.
    pub fn node_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }
}

/// Roster constraints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionConfig {
    /// Maximum total price of the roster.
    #[serde(default = "default_budget")]
    pub budget: u64,

    /// Exact number of roster members.
    #[serde(default = "default_team_size")]
    pub team_size: usize,

    /// Competitors that must be selected.
    #[serde(default)]
    pub include: Vec<CompetitorId>,

    /// Competitors that must not be selected.
    #[serde(default)]
    pub exclude: Vec<CompetitorId>,
}

fn default_budget() -> u64 {
    DEFAULT_BUDGET
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            team_size: DEFAULT_TEAM_SIZE,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Exact search strategy for roster selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Price buckets when the table fits, branch and bound otherwise.
    #[default]
    Auto,

    /// Depth-first branch and bound; exact for any price granularity.
    BranchAndBound,

    /// Dynamic programming over gcd-scaled price units.
    PriceBuckets,
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStrategy::Auto => write!(f, "Auto"),
            SelectionStrategy::BranchAndBound => write!(f, "BranchAndBound"),
            SelectionStrategy::PriceBuckets => write!(f, "PriceBuckets"),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend selecting.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend selecting; added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes to explore.
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
