//! Caller-imposed termination conditions for roster selection.
//!
//! Selection is exact, so a fired termination never yields a roster: the
//! search stops with [`PelotonError::Timeout`](peloton_core::PelotonError::Timeout).

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::scope::SelectionScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for deciding when to abandon a search.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SelectionScope) -> bool;
}

/// Never terminates; the search runs until optimality is proven.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    #[inline]
    fn is_terminated(&self, _scope: &SelectionScope) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    #[inline]
    fn is_terminated(&self, scope: &SelectionScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}
