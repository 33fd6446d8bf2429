//! Fixed-point projected points and captaincy multipliers.

mod multiplier;
mod points;

pub use multiplier::{Multiplier, CAPTAIN_COUNT};
pub use points::Points;
