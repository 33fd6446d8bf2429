//! Peloton - season roster planning
//!
//! Score a competitor table, pick the optimal roster under a budget and
//! plan per-event captaincy.
//!
//! # Example
//!
//! ```rust
//! use peloton::prelude::*;
//!
//! let catalog = EventCatalog::classics_2026();
//! let riders = vec![
//!     Competitor::new(1, "Rider", 2_000_000)
//!         .with_quality(Quality::Cobbles, 9)
//!         .entered_in("paris-roubaix"),
//! ];
//!
//! let table = peloton::score(&riders, &catalog).unwrap();
//! let request = SelectionRequest::new().with_team_size(1);
//! let roster = peloton::select(&table, &request).unwrap();
//! let plan = peloton::assign_captaincy(&roster, &catalog).unwrap();
//!
//! assert_eq!(roster.len(), 1);
//! assert_eq!(plan.bonus(), roster.total_points() + roster.total_points());
//! ```

// Domain types
pub use peloton_core::{
    points_for_position, Competitor, CompetitorId, Event, EventCatalog, EventCode, InfeasibleReason,
    Multiplier, PelotonError, Points, Quality, QualityRatings, Result, CAPTAIN_COUNT, FINISHING_POINTS,
    MAX_QUALITY,
};

// Scoring model
pub use peloton_scoring::{CompetitorFilter, ScoreCache, ScoredCompetitor, ScoredTable, TableFingerprint};

// Selection and captaincy
pub use peloton_solver::{
    CaptaincyEntry, CaptaincyPlan, EventAssignment, Roster, RosterSelector, RosterSummary, SelectionRequest,
    SelectionStats,
};

// Terminations
pub use peloton_solver::termination;

// Configuration
pub use peloton_config::{ConfigError, PelotonConfig, SelectionConfig, SelectionStrategy, TerminationConfig};

mod planner;
pub use planner::{plan_season, SeasonPlan};

/// Enriches every competitor with per-event and total projections.
///
/// See [`peloton_scoring::score`].
pub fn score(table: &[Competitor], catalog: &EventCatalog) -> Result<ScoredTable> {
    peloton_scoring::score(table, catalog)
}

/// Picks the optimal roster with no time limit and the automatic strategy.
///
/// Use [`RosterSelector`] directly for limits or a fixed strategy.
pub fn select(table: &ScoredTable, request: &SelectionRequest) -> Result<Roster> {
    RosterSelector::new().select(table, request)
}

/// Ranks the roster in every catalog event and applies captain multipliers.
pub fn assign_captaincy(roster: &Roster, catalog: &EventCatalog) -> Result<CaptaincyPlan> {
    peloton_solver::assign_captaincy(roster, catalog)
}

pub mod prelude {
    pub use super::{
        Competitor, CompetitorId, Event, EventCatalog, Multiplier, PelotonConfig, PelotonError, Points, Quality,
        Roster, RosterSelector, SelectionRequest, SelectionStrategy,
    };
    pub use super::{plan_season, SeasonPlan};
}

#[cfg(test)]
mod tests;
