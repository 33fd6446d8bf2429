//! Depth-first branch and bound over include/exclude decisions.

use peloton_core::Result;
use tracing::trace;

use super::bounder::LagrangianBounder;
use super::SearchOutcome;
use crate::candidate::{Candidate, CandidatePool};
use crate::scope::SelectionScope;
use crate::termination::Termination;

/// Partial roster at one point of the search tree.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    /// Candidates decided so far, in search order.
    depth: usize,
    /// Slots still to fill.
    remaining: usize,
    budget: u64,
    points: i64,
}

/// Exact search that is independent of price granularity.
///
/// Each node decides one candidate, trying inclusion first. A node is
/// pruned when too few candidates remain, when the cheapest completion
/// overruns the budget, or when its optimistic bound cannot beat the
/// incumbent.
#[derive(Debug)]
pub(crate) struct BranchAndBound<'a> {
    pool: &'a CandidatePool,
    /// Positions in `pool.free`, in search order.
    order: Vec<usize>,
    ordered: Vec<Candidate>,
    bounder: LagrangianBounder,
}

struct Incumbent {
    path: Vec<usize>,
    best: Option<SearchOutcome>,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(pool: &'a CandidatePool) -> Self {
        let lambda = LagrangianBounder::root_multiplier(&pool.free, pool.slots, pool.budget_left);
        let order = LagrangianBounder::order(&pool.free, lambda);
        let ordered: Vec<Candidate> = order.iter().map(|&i| pool.free[i]).collect();
        let bounder = LagrangianBounder::new(&ordered, pool.slots, lambda);
        Self {
            pool,
            order,
            ordered,
            bounder,
        }
    }

    pub fn solve<T: Termination>(&self, termination: &T, scope: &mut SelectionScope) -> Result<Option<SearchOutcome>> {
        trace!(event = "branch_and_bound_root", lambda = self.bounder.lambda());

        let root = SearchNode {
            depth: 0,
            remaining: self.pool.slots,
            budget: self.pool.budget_left,
            points: 0,
        };
        let mut incumbent = Incumbent {
            path: Vec::with_capacity(self.pool.slots),
            best: None,
        };
        self.expand(root, &mut incumbent, termination, scope)?;

        Ok(incumbent.best.map(|outcome| {
            let mut chosen: Vec<usize> = outcome.chosen.iter().map(|&d| self.order[d]).collect();
            chosen.sort_unstable();
            SearchOutcome {
                chosen,
                points: outcome.points,
            }
        }))
    }

    fn expand<T: Termination>(
        &self,
        node: SearchNode,
        incumbent: &mut Incumbent,
        termination: &T,
        scope: &mut SelectionScope,
    ) -> Result<()> {
        scope.stats_mut().record_node();
        scope.check(termination)?;

        if node.remaining == 0 {
            if incumbent.best.as_ref().map_or(true, |b| node.points > b.points) {
                scope.stats_mut().record_improvement();
                trace!(event = "incumbent_improved", points = node.points, nodes = scope.stats().nodes_explored);
                incumbent.best = Some(SearchOutcome {
                    chosen: incumbent.path.clone(),
                    points: node.points,
                });
            }
            return Ok(());
        }

        if self.ordered.len() - node.depth < node.remaining
            || self.bounder.min_cost(node.depth, node.remaining) > node.budget
        {
            scope.stats_mut().record_prune();
            return Ok(());
        }

        if let Some(best) = &incumbent.best {
            let bound = self
                .bounder
                .optimistic_bound(node.depth, node.remaining, node.budget);
            if LagrangianBounder::can_prune(node.points, bound, best.points) {
                scope.stats_mut().record_prune();
                return Ok(());
            }
        }

        let candidate = self.ordered[node.depth];
        if candidate.price <= node.budget {
            incumbent.path.push(node.depth);
            let include = SearchNode {
                depth: node.depth + 1,
                remaining: node.remaining - 1,
                budget: node.budget - candidate.price,
                points: node.points + candidate.points,
            };
            let result = self.expand(include, incumbent, termination, scope);
            incumbent.path.pop();
            result?;
        }

        let exclude = SearchNode {
            depth: node.depth + 1,
            ..node
        };
        self.expand(exclude, incumbent, termination, scope)
    }
}
