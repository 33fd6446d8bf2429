//! Selection requests.

use std::collections::BTreeSet;

use peloton_config::{SelectionConfig, DEFAULT_BUDGET, DEFAULT_TEAM_SIZE};
use peloton_core::CompetitorId;

/// What the selector is asked to build.
///
/// # Examples
///
/// ```
/// use peloton_core::CompetitorId;
/// use peloton_solver::SelectionRequest;
///
/// let request = SelectionRequest::new()
///     .with_budget(45_000_000)
///     .with_team_size(2)
///     .include(1u64)
///     .exclude(3u64);
///
/// assert_eq!(request.team_size, 2);
/// assert!(request.include.contains(&CompetitorId(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub budget: u64,
    pub team_size: usize,
    /// Competitors fixed into the roster.
    pub include: BTreeSet<CompetitorId>,
    /// Competitors fixed out of the roster.
    pub exclude: BTreeSet<CompetitorId>,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            team_size: DEFAULT_TEAM_SIZE,
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
        }
    }
}

impl SelectionRequest {
    /// A request with the default budget and team size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            budget: config.budget,
            team_size: config.team_size,
            include: config.include.iter().copied().collect(),
            exclude: config.exclude.iter().copied().collect(),
        }
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn include(mut self, id: impl Into<CompetitorId>) -> Self {
        self.include.insert(id.into());
        self
    }

    pub fn exclude(mut self, id: impl Into<CompetitorId>) -> Self {
        self.exclude.insert(id.into());
        self
    }

    pub fn with_includes<I: IntoIterator<Item = CompetitorId>>(mut self, ids: I) -> Self {
        self.include.extend(ids);
        self
    }

    pub fn with_excludes<I: IntoIterator<Item = CompetitorId>>(mut self, ids: I) -> Self {
        self.exclude.extend(ids);
        self
    }
}
