//! Exact search over the free candidates.
//!
//! Both strategies solve the same problem: choose exactly `slots` free
//! candidates with total price within `budget_left`, maximizing total points.
//! The incumbent only changes on a strictly better total, so among equal
//! optima the first one found is kept.

mod bounder;
mod branch_and_bound;
mod price_buckets;

#[cfg(test)]
mod tests;

use peloton_config::SelectionStrategy;
use peloton_core::Result;
use tracing::{debug, warn};

use crate::candidate::CandidatePool;
use crate::scope::SelectionScope;
use crate::termination::Termination;

use branch_and_bound::BranchAndBound;
use price_buckets::{PriceBuckets, PriceGrid};

/// The best completion of a pool: positions in `pool.free` and their points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    pub chosen: Vec<usize>,
    pub points: i64,
}

/// Runs the requested strategy, resolving `Auto` against `cell_limit`.
///
/// Returns `Ok(None)` when no completion fits the budget.
pub(crate) fn solve<T: Termination>(
    pool: &CandidatePool,
    strategy: SelectionStrategy,
    cell_limit: u64,
    termination: &T,
    scope: &mut SelectionScope,
) -> Result<Option<SearchOutcome>> {
    if pool.slots == 0 {
        return Ok(Some(SearchOutcome {
            chosen: Vec::new(),
            points: 0,
        }));
    }

    let grid = PriceGrid::new(&pool.free, pool.slots, pool.budget_left);
    let fits = grid.decision_bits() <= cell_limit;

    let use_buckets = match strategy {
        SelectionStrategy::Auto => fits,
        SelectionStrategy::PriceBuckets if !fits => {
            warn!(
                event = "price_buckets_over_limit",
                decision_bits = grid.decision_bits(),
                cell_limit,
            );
            false
        }
        SelectionStrategy::PriceBuckets => true,
        SelectionStrategy::BranchAndBound => false,
    };

    debug!(
        event = "search_strategy",
        requested = %strategy,
        price_buckets = use_buckets,
        price_unit = grid.unit(),
        capacity_units = grid.capacity(),
        free = pool.free.len(),
        slots = pool.slots,
    );

    if use_buckets {
        PriceBuckets::new(pool, grid).solve(termination, scope)
    } else {
        BranchAndBound::new(pool).solve(termination, scope)
    }
}
