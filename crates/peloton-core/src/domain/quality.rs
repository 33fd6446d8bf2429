//! Quality dimensions and per-competitor ratings.

use std::fmt;
use std::str::FromStr;

/// Highest rating a competitor can hold in any quality dimension.
pub const MAX_QUALITY: u8 = 10;

/// A named quality dimension an event can be scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quality {
    /// General classification (stage races).
    Gc,
    Climb,
    #[cfg_attr(feature = "serde", serde(rename = "tt", alias = "time_trial"))]
    TimeTrial,
    Sprint,
    Punch,
    Hill,
    Cobbles,
}

impl Quality {
    /// Every dimension, in rating-sheet order.
    pub const ALL: [Quality; 7] = [
        Quality::Gc,
        Quality::Climb,
        Quality::TimeTrial,
        Quality::Sprint,
        Quality::Punch,
        Quality::Hill,
        Quality::Cobbles,
    ];

    /// Short lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Quality::Gc => "gc",
            Quality::Climb => "climb",
            Quality::TimeTrial => "tt",
            Quality::Sprint => "sprint",
            Quality::Punch => "punch",
            Quality::Hill => "hill",
            Quality::Cobbles => "cobbles",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown quality label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuality(pub String);

impl fmt::Display for UnknownQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quality dimension '{}'", self.0)
    }
}

impl std::error::Error for UnknownQuality {}

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gc" => Ok(Quality::Gc),
            "climb" => Ok(Quality::Climb),
            "tt" | "time_trial" | "timetrial" => Ok(Quality::TimeTrial),
            "sprint" => Ok(Quality::Sprint),
            "punch" => Ok(Quality::Punch),
            "hill" => Ok(Quality::Hill),
            "cobbles" => Ok(Quality::Cobbles),
            other => Err(UnknownQuality(other.to_string())),
        }
    }
}

/// A competitor's rating in every quality dimension, each 0..=10.
///
/// Missing dimensions default to 0.
///
/// # Examples
///
/// ```
/// use peloton_core::{Quality, QualityRatings};
///
/// let ratings = QualityRatings::default()
///     .with(Quality::Cobbles, 9)
///     .with(Quality::Hill, 7);
///
/// assert_eq!(ratings.get(Quality::Cobbles), 9);
/// assert_eq!(ratings.get(Quality::Sprint), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QualityRatings {
    pub gc: u8,
    pub climb: u8,
    pub tt: u8,
    pub sprint: u8,
    pub punch: u8,
    pub hill: u8,
    pub cobbles: u8,
}

impl QualityRatings {
    /// Returns the rating for a dimension.
    #[inline]
    pub fn get(&self, quality: Quality) -> u8 {
        match quality {
            Quality::Gc => self.gc,
            Quality::Climb => self.climb,
            Quality::TimeTrial => self.tt,
            Quality::Sprint => self.sprint,
            Quality::Punch => self.punch,
            Quality::Hill => self.hill,
            Quality::Cobbles => self.cobbles,
        }
    }

    /// Sets the rating for a dimension.
    pub fn set(&mut self, quality: Quality, value: u8) {
        let slot = match quality {
            Quality::Gc => &mut self.gc,
            Quality::Climb => &mut self.climb,
            Quality::TimeTrial => &mut self.tt,
            Quality::Sprint => &mut self.sprint,
            Quality::Punch => &mut self.punch,
            Quality::Hill => &mut self.hill,
            Quality::Cobbles => &mut self.cobbles,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, quality: Quality, value: u8) -> Self {
        self.set(quality, value);
        self
    }

    /// Iterates `(dimension, rating)` pairs in rating-sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Quality, u8)> + '_ {
        Quality::ALL.into_iter().map(move |q| (q, self.get(q)))
    }

    /// Returns the first dimension rated above [`MAX_QUALITY`], if any.
    pub fn first_out_of_range(&self) -> Option<(Quality, u8)> {
        self.iter().find(|&(_, v)| v > MAX_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for q in Quality::ALL {
            assert_eq!(q.label().parse::<Quality>(), Ok(q));
        }
        assert_eq!("Time_Trial".parse::<Quality>(), Ok(Quality::TimeTrial));
        assert!("descending".parse::<Quality>().is_err());
    }

    #[test]
    fn test_set_and_get_every_dimension() {
        let mut ratings = QualityRatings::default();
        for (i, q) in Quality::ALL.into_iter().enumerate() {
            ratings.set(q, i as u8);
        }
        for (i, q) in Quality::ALL.into_iter().enumerate() {
            assert_eq!(ratings.get(q), i as u8);
        }
    }

    #[test]
    fn test_out_of_range_detection() {
        let ok = QualityRatings::default().with(Quality::Sprint, MAX_QUALITY);
        assert_eq!(ok.first_out_of_range(), None);

        let bad = ok.with(Quality::Hill, 11);
        assert_eq!(bad.first_out_of_range(), Some((Quality::Hill, 11)));
    }
}
