//! Captaincy multipliers.

use std::fmt;

/// Number of ranks per event that receive a captaincy boost.
pub const CAPTAIN_COUNT: usize = 3;

/// A per-event score multiplier, stored in half steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiplier {
    halves: u8,
}

impl Multiplier {
    /// First captain: 3.0x.
    pub const FIRST: Multiplier = Multiplier { halves: 6 };
    /// Second captain: 2.5x.
    pub const SECOND: Multiplier = Multiplier { halves: 5 };
    /// Third captain: 2.0x.
    pub const THIRD: Multiplier = Multiplier { halves: 4 };
    /// Everyone else: 1.0x.
    pub const NONE: Multiplier = Multiplier { halves: 2 };

    /// Multiplier for a 1-based rank within an event.
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::FIRST,
            2 => Self::SECOND,
            3 => Self::THIRD,
            _ => Self::NONE,
        }
    }

    #[inline]
    pub const fn halves(&self) -> u8 {
        self.halves
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    /// Returns true for the three captain multipliers.
    #[inline]
    pub const fn is_captain(&self) -> bool {
        self.halves > Self::NONE.halves
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Multiplier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
