//! The roster selector.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use peloton_config::{PelotonConfig, SelectionStrategy, DEFAULT_PRICE_BUCKET_CELL_LIMIT};
use peloton_core::{InfeasibleReason, Result};
use peloton_scoring::ScoredTable;
use tracing::{debug, info, warn};

use crate::candidate::CandidatePool;
use crate::request::SelectionRequest;
use crate::roster::Roster;
use crate::scope::SelectionScope;
use crate::search;
use crate::termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination, TimeTermination,
};

/// The termination built from a [`PelotonConfig`].
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<NodeCountTermination>,
    Option<ExternalTermination>,
)>;

/// Exact budget- and size-constrained roster selection.
///
/// # Examples
///
/// ```
/// use peloton_core::CompetitorId;
/// use peloton_scoring::score;
/// use peloton_solver::{RosterSelector, SelectionRequest};
/// use peloton_test::three_rider_market;
///
/// let (catalog, riders) = three_rider_market();
/// let table = score(&riders, &catalog).unwrap();
///
/// let request = SelectionRequest::new().with_team_size(2).with_budget(45_000_000);
/// let roster = RosterSelector::new().select(&table, &request).unwrap();
///
/// assert_eq!(roster.ids(), vec![CompetitorId(1), CompetitorId(2)]);
/// assert_eq!(roster.total_cost(), 45_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct RosterSelector<T = NoTermination> {
    termination: T,
    strategy: SelectionStrategy,
    cell_limit: u64,
}

impl Default for RosterSelector<NoTermination> {
    fn default() -> Self {
        Self {
            termination: NoTermination,
            strategy: SelectionStrategy::Auto,
            cell_limit: DEFAULT_PRICE_BUCKET_CELL_LIMIT,
        }
    }
}

impl RosterSelector<NoTermination> {
    /// A selector that runs until optimality is proven.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterSelector<ConfiguredTermination> {
    /// A selector with the configured strategy and limits.
    pub fn from_config(config: &PelotonConfig) -> Self {
        let termination = OrTermination::new((
            config.time_limit().map(TimeTermination::new),
            config.node_count_limit().map(NodeCountTermination::new),
            None,
        ));
        Self {
            termination,
            strategy: config.strategy,
            cell_limit: config.price_bucket_cell_limit,
        }
    }

    /// Adds a cancellation flag another thread can raise.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        (self.termination.0).2 = Some(ExternalTermination::new(flag));
        self
    }
}

impl<T: Termination> RosterSelector<T> {
    /// Replaces the termination.
    pub fn with_termination<U: Termination>(self, termination: U) -> RosterSelector<U> {
        RosterSelector {
            termination,
            strategy: self.strategy,
            cell_limit: self.cell_limit,
        }
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Largest price-bucket table, in decision bits, before branch and
    /// bound is used instead.
    pub fn with_cell_limit(mut self, cell_limit: u64) -> Self {
        self.cell_limit = cell_limit;
        self
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Returns the optimal roster for `request`.
    ///
    /// # Errors
    ///
    /// - [`PelotonError::Infeasible`](peloton_core::PelotonError::Infeasible)
    ///   naming the constraint that cannot be met.
    /// - [`PelotonError::Timeout`](peloton_core::PelotonError::Timeout) when
    ///   the termination fires first. No partial roster is returned.
    pub fn select(&self, table: &ScoredTable, request: &SelectionRequest) -> Result<Roster> {
        info!(
            event = "select_start",
            candidate_count = table.len(),
            budget = request.budget,
            team_size = request.team_size,
            include_count = request.include.len(),
            exclude_count = request.exclude.len(),
            strategy = %self.strategy,
        );

        let mut scope = SelectionScope::start();
        let pool = CandidatePool::build(table, request)?;

        let outcome = match search::solve(&pool, self.strategy, self.cell_limit, &self.termination, &mut scope) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    event = "select_timeout",
                    elapsed_ms = scope.elapsed().as_millis() as u64,
                    nodes_explored = scope.stats().nodes_explored,
                );
                return Err(err);
            }
        };

        let stats = scope.finish();
        debug!(
            event = "select_stats",
            nodes_explored = stats.nodes_explored,
            nodes_pruned = stats.nodes_pruned,
            prune_rate = stats.prune_rate(),
            improvements = stats.improvements,
            table_cells = stats.table_cells,
        );

        let Some(outcome) = outcome else {
            return Err(InfeasibleReason::NoFeasibleRoster {
                team_size: request.team_size,
                budget: request.budget,
            }
            .into());
        };

        let members = pool
            .forced
            .iter()
            .chain(outcome.chosen.iter().map(|&i| &pool.free[i]))
            .map(|c| table.competitors()[c.index].clone())
            .collect();
        let roster = Roster::new(members, table.catalog().fingerprint(), stats);

        info!(
            event = "select_end",
            points = %roster.total_points(),
            cost = roster.total_cost(),
            duration_ms = roster.stats().elapsed.as_millis() as u64,
            nodes_explored = roster.stats().nodes_explored,
        );

        Ok(roster)
    }
}
