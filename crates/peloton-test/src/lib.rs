//! Shared test fixtures for Peloton crates.
//!
//! This crate provides data builders only. It depends on `peloton-core`
//! alone so every other crate can take it as a dev-dependency.
//!
//! - [`catalog`] - small event catalogs with predictable tiers
//! - [`market`] - hand-built competitor tables with known optima
//! - [`random`] - seeded random markets for cross-checking solvers
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! peloton-test = { workspace = true }
//! ```

pub mod catalog;
pub mod market;
pub mod random;

pub use catalog::{single_event_catalog, three_event_catalog};
pub use market::{rider, three_rider_market};
pub use random::{random_market, MarketShape};
