//! Selection statistics.
//!
//! Stack-allocated counters for one selection run.

use std::time::Duration;

/// Counters collected while searching for a roster.
///
/// # Example
///
/// ```
/// use peloton_solver::stats::SelectionStats;
///
/// let mut stats = SelectionStats::default();
/// stats.record_node();
/// stats.record_node();
/// stats.record_prune();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.prune_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Search-tree nodes visited by branch and bound.
    pub nodes_explored: u64,
    /// Nodes cut by a bound or a feasibility test.
    pub nodes_pruned: u64,
    /// Times the incumbent roster improved.
    pub improvements: u64,
    /// Cells of the price-bucket table.
    pub table_cells: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SelectionStats {
    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.nodes_pruned += 1;
    }

    #[inline]
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Fraction of explored nodes that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.nodes_explored == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / self.nodes_explored as f64
        }
    }
}
