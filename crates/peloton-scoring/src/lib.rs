//! Peloton Scoring - projected points for every competitor
//!
//! Turns discrete quality ratings into per-event expected points:
//! - [`projection`] - race score and the five-tier step function
//! - [`score`] - the validated, order-preserving scoring pass
//! - [`ScoredTable`] - the enriched table with ranking helpers
//! - [`ScoreCache`] - explicit caller-owned cache keyed by content

pub mod cache;
pub mod enrich;
pub mod projection;
pub mod scored;


pub use cache::{ScoreCache, TableFingerprint};
pub use enrich::{score, score_competitor};
pub use projection::{
    expected_points, project_event, race_score, ProjectionTier, MAX_EVENT_POINTS, PROJECTION_TIERS,
};
pub use scored::{CompetitorFilter, ScoredCompetitor, ScoredTable};
