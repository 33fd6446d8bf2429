//! Competitor records.

use std::collections::BTreeSet;
use std::fmt;

use super::{EventCatalog, EventCode, Quality, QualityRatings, MAX_QUALITY};
use crate::error::{PelotonError, Result};

/// Unique identifier of a competitor in the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompetitorId(pub u64);

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CompetitorId {
    fn from(id: u64) -> Self {
        CompetitorId(id)
    }
}

/// One selectable competitor, as handed over by the data source.
///
/// # Examples
///
/// ```
/// use peloton_core::{Competitor, Quality};
///
/// let rider = Competitor::new(1, "Mathieu van der Poel", 7_000_000)
///     .with_team("Alpecin")
///     .with_category("Cobbles")
///     .with_quality(Quality::Cobbles, 10)
///     .entered_in("paris-roubaix");
///
/// assert!(rider.participates("paris-roubaix"));
/// assert_eq!(rider.price_millions(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub team: String,
    /// Price in whole currency units.
    pub price: u64,
    /// Free-text type label, e.g. "Sprinter".
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub qualities: QualityRatings,
    /// Codes of the events this competitor is entered in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub races: BTreeSet<EventCode>,
}

impl Competitor {
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: String::new(),
            price,
            category: String::new(),
            qualities: QualityRatings::default(),
            races: BTreeSet::new(),
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_quality(mut self, quality: Quality, value: u8) -> Self {
        self.qualities.set(quality, value);
        self
    }

    pub fn with_qualities(mut self, qualities: QualityRatings) -> Self {
        self.qualities = qualities;
        self
    }

    pub fn entered_in(mut self, code: impl Into<EventCode>) -> Self {
        self.races.insert(code.into());
        self
    }

    #[inline]
    pub fn participates(&self, code: &str) -> bool {
        self.races.contains(code)
    }

    /// Price in millions of currency units.
    pub fn price_millions(&self) -> f64 {
        self.price as f64 / 1_000_000.0
    }

    /// Number of catalog events this competitor is entered in.
    pub fn race_count(&self, catalog: &EventCatalog) -> usize {
        catalog
            .iter()
            .filter(|e| self.participates(e.code.as_str()))
            .count()
    }

    /// Checks the record against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PelotonError::MalformedInput`] naming the offending field
    /// when the name is empty, the price is zero, a rating exceeds
    /// [`MAX_QUALITY`], or an entry refers to an event outside the catalog.
    pub fn validate(&self, catalog: &EventCatalog) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PelotonError::malformed(self.id, "name", "is empty"));
        }
        if self.price == 0 {
            return Err(PelotonError::malformed(self.id, "price", "must be positive"));
        }
        if let Some((quality, value)) = self.qualities.first_out_of_range() {
            return Err(PelotonError::malformed(
                self.id,
                "qualities",
                format!("{quality} rating {value} is outside 0..={MAX_QUALITY}"),
            ));
        }
        if let Some(unknown) = self.races.iter().find(|code| !catalog.contains(code.as_str())) {
            return Err(PelotonError::malformed(
                self.id,
                "races",
                format!("refers to unknown event '{unknown}'"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Event;

    fn catalog() -> EventCatalog {
        EventCatalog::new(vec![
            Event::new("e3", "E3 Saxo Classic", Quality::Cobbles, 0.7),
            Event::new("amstel", "Amstel Gold Race", Quality::Hill, 0.7),
        ])
        .unwrap()
    }

    #[test]
    fn test_race_count_only_counts_catalog_events() {
        let rider = Competitor::new(1, "Rider", 1_000_000)
            .entered_in("e3")
            .entered_in("amstel");
        assert_eq!(rider.race_count(&catalog()), 2);
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        let rider = Competitor::new(1, "Rider", 500_000)
            .with_quality(Quality::Cobbles, 10)
            .entered_in("e3");
        assert!(rider.validate(&catalog()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let err = Competitor::new(4, "Rider", 0).validate(&catalog()).unwrap_err();
        match err {
            PelotonError::MalformedInput { competitor, field, .. } => {
                assert_eq!(competitor, CompetitorId(4));
                assert_eq!(field, "price");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_rating_above_ten() {
        let err = Competitor::new(5, "Rider", 1)
            .with_quality(Quality::Punch, 11)
            .validate(&catalog())
            .unwrap_err();
        assert!(err.to_string().contains("punch rating 11"));
    }

    #[test]
    fn test_validate_rejects_unknown_event() {
        let err = Competitor::new(6, "Rider", 1)
            .entered_in("tour-de-france")
            .validate(&catalog())
            .unwrap_err();
        assert!(err.to_string().contains("unknown event 'tour-de-france'"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = Competitor::new(7, "  ", 1).validate(&catalog()).unwrap_err();
        assert!(err.to_string().contains("`name` is empty"));
    }
}
