//! Selection-level scope.

use std::time::{Duration, Instant};

use peloton_core::{PelotonError, Result};

use crate::stats::SelectionStats;
use crate::termination::Termination;

/// Running state of one selection: its clock and counters.
#[derive(Debug)]
pub struct SelectionScope {
    start_time: Instant,
    stats: SelectionStats,
}

impl SelectionScope {
    /// Starts the clock.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            stats: SelectionStats::default(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn stats(&self) -> &SelectionStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SelectionStats {
        &mut self.stats
    }

    /// Fails with [`PelotonError::Timeout`] once `termination` fires.
    pub fn check<T: Termination>(&self, termination: &T) -> Result<()> {
        if termination.is_terminated(self) {
            return Err(PelotonError::Timeout {
                elapsed: self.elapsed(),
                nodes_explored: self.stats.nodes_explored,
            });
        }
        Ok(())
    }

    /// Stops the clock and returns the counters.
    pub fn finish(mut self) -> SelectionStats {
        self.stats.elapsed = self.start_time.elapsed();
        self.stats
    }
}
