//! Peloton Solver - exact roster selection and captaincy
//!
//! - [`RosterSelector`] - picks the best roster under a budget and a fixed
//!   size, with forced includes and excludes
//! - [`termination`] - caller-imposed limits that abort a search
//! - [`assign_captaincy`] - per-event captain multipliers for a roster
//! - [`RosterSummary`] - headline figures for display and comparison
//!
//! Selection is exact: it returns the true maximum or an error, never a
//! best-effort roster.

mod candidate;
pub mod captaincy;
pub mod request;
pub mod roster;
pub mod scope;
mod search;
pub mod selector;
pub mod stats;
pub mod summary;
pub mod termination;

#[cfg(test)]
mod tests;

pub use captaincy::{assign_captaincy, CaptaincyEntry, CaptaincyPlan, EventAssignment};
pub use request::SelectionRequest;
pub use roster::Roster;
pub use scope::SelectionScope;
pub use selector::{ConfiguredTermination, RosterSelector};
pub use stats::SelectionStats;
pub use summary::RosterSummary;
pub use termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination, TimeTermination,
};
