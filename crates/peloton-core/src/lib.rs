//! Peloton Core - domain types for season roster planning
//!
//! This crate provides the fundamental abstractions shared by every
//! Peloton crate:
//! - Competitors with quality ratings and event participation
//! - The event catalog and its per-event scoring profiles
//! - Fixed-point [`Points`] and captaincy [`Multiplier`] values
//! - The error type reported by scoring and selection

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    points_for_position, Competitor, CompetitorId, Event, EventCatalog, EventCode, Quality,
    QualityRatings, FINISHING_POINTS, MAX_QUALITY,
};
pub use error::{InfeasibleReason, PelotonError, Result};
pub use score::{Multiplier, Points, CAPTAIN_COUNT};
