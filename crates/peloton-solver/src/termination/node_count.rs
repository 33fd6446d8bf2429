//! Explored-node termination.

use super::Termination;
use crate::scope::SelectionScope;

/// Terminates once the search has explored a number of nodes.
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SelectionScope) -> bool {
        scope.stats().nodes_explored >= self.limit
    }
}
