//! Error types for Peloton

use std::time::Duration;

use thiserror::Error;

use crate::domain::CompetitorId;

/// Main error type for scoring and selection.
#[derive(Debug, Error)]
pub enum PelotonError {
    /// A competitor record failed validation at the scoring boundary.
    #[error("Malformed input for competitor {competitor}: `{field}` {reason}")]
    MalformedInput {
        competitor: CompetitorId,
        field: &'static str,
        reason: String,
    },

    /// The event catalog itself is invalid.
    #[error("Malformed event catalog: {0}")]
    MalformedCatalog(String),

    /// No roster satisfies the selection constraints.
    #[error("Infeasible selection: {0}")]
    Infeasible(#[from] InfeasibleReason),

    /// A caller-imposed termination fired before the search proved optimality.
    #[error("Optimizer timed out after {elapsed:?} ({nodes_explored} nodes explored)")]
    Timeout {
        elapsed: Duration,
        nodes_explored: u64,
    },
}

impl PelotonError {
    /// Builds a [`PelotonError::MalformedInput`].
    pub fn malformed(competitor: CompetitorId, field: &'static str, reason: impl Into<String>) -> Self {
        PelotonError::MalformedInput {
            competitor,
            field,
            reason: reason.into(),
        }
    }

    /// Returns the infeasibility reason, if this is an infeasible-selection error.
    pub fn infeasible_reason(&self) -> Option<&InfeasibleReason> {
        match self {
            PelotonError::Infeasible(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns true for [`PelotonError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, PelotonError::Timeout { .. })
    }
}

/// Which selection constraint could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfeasibleReason {
    #[error("team size must be at least 1")]
    EmptyRoster,

    #[error("no candidates remain after filtering")]
    NoCandidates,

    #[error("competitor {0} is both forced in and forced out")]
    Contradictory(CompetitorId),

    #[error("competitor {0} is not in the scored table")]
    UnknownCompetitor(CompetitorId),

    #[error("{includes} forced includes exceed team size {team_size}")]
    TooManyIncludes { includes: usize, team_size: usize },

    #[error("forced includes cost {cost}, over budget {budget}")]
    IncludesOverBudget { cost: u64, budget: u64 },

    #[error("only {available} candidates available for team size {team_size}")]
    NotEnoughCandidates { available: usize, team_size: usize },

    #[error("no roster of {team_size} fits within budget {budget}")]
    NoFeasibleRoster { team_size: usize, budget: u64 },
}

/// Result type alias for Peloton operations
pub type Result<T> = std::result::Result<T, PelotonError>;
