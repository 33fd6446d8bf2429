//! Points - fixed-point projected points

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use super::Multiplier;

/// Projected points stored as whole hundredths.
///
/// Every projection tier and every captaincy product is a whole number of
/// hundredths, so sums and comparisons are exact and reproducible.
///
/// # Examples
///
/// ```
/// use peloton_core::{Multiplier, Points};
///
/// let base = Points::from_hundredths(50); // 0.5
/// let boosted = base.boosted(Multiplier::for_rank(2));
///
/// assert_eq!(boosted, Points::from_hundredths(125));
/// assert_eq!(boosted.as_f64(), 1.25);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Points {
    hundredths: i64,
}

impl Points {
    /// The zero score.
    pub const ZERO: Points = Points { hundredths: 0 };

    #[inline]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Points { hundredths }
    }

    /// Creates a value of whole points.
    #[inline]
    pub const fn whole(points: i64) -> Self {
        Points {
            hundredths: points * 100,
        }
    }

    #[inline]
    pub const fn hundredths(&self) -> i64 {
        self.hundredths
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.hundredths == 0
    }

    /// Applies a captaincy multiplier.
    ///
    /// Exact whenever the hundredths are even, which holds for every
    /// per-event projection.
    #[inline]
    pub const fn boosted(self, multiplier: Multiplier) -> Self {
        Points {
            hundredths: self.hundredths * multiplier.halves() as i64 / 2,
        }
    }
}

impl fmt::Debug for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points({})", self)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}", precision, self.as_f64())
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Points::from_hundredths(self.hundredths + other.hundredths)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, other: Self) {
        self.hundredths += other.hundredths;
    }
}

impl Sub for Points {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Points::from_hundredths(self.hundredths - other.hundredths)
    }
}

impl Neg for Points {
    type Output = Self;

    fn neg(self) -> Self {
        Points::from_hundredths(-self.hundredths)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Points {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Points {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Points::from_hundredths((value * 100.0).round() as i64))
    }
}
