//! Events and the season event catalog.

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Quality;
use crate::error::{PelotonError, Result};

/// Unique short code of an event (e.g. `"paris-roubaix"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventCode(String);

impl EventCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for EventCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for EventCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One scored event in the season and its scoring profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub code: EventCode,
    pub name: String,
    /// Dimension weighted at 70%.
    pub primary: Quality,
    /// Dimension weighted at 30%; contributes nothing when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: Option<Quality>,
    /// Race importance weight in (0, 1].
    pub weight: f64,
}

impl Event {
    pub fn new(code: impl Into<EventCode>, name: impl Into<String>, primary: Quality, weight: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            primary,
            secondary: None,
            weight,
        }
    }

    pub fn with_secondary(mut self, secondary: Quality) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// The fixed, validated list of events in a season.
///
/// Order is significant: per-event projections and captaincy plans are
/// reported in catalog order.
///
/// # Examples
///
/// ```
/// use peloton_core::{Event, EventCatalog, Quality};
///
/// let catalog = EventCatalog::new(vec![
///     Event::new("roubaix", "Paris-Roubaix", Quality::Cobbles, 0.9),
///     Event::new("amstel", "Amstel Gold Race", Quality::Hill, 0.7).with_secondary(Quality::Punch),
/// ]).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.index_of("amstel"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Event>", into = "Vec<Event>"))]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Validates and wraps a list of events.
    ///
    /// # Errors
    ///
    /// Returns [`PelotonError::MalformedCatalog`] for an empty list, a
    /// duplicate or empty code, an empty name, or a weight outside (0, 1].
    pub fn new(events: Vec<Event>) -> Result<Self> {
        if events.is_empty() {
            return Err(PelotonError::MalformedCatalog("catalog has no events".into()));
        }
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if event.code.as_str().is_empty() {
                return Err(PelotonError::MalformedCatalog("event with empty code".into()));
            }
            if !seen.insert(event.code.as_str()) {
                return Err(PelotonError::MalformedCatalog(format!(
                    "duplicate event code '{}'",
                    event.code
                )));
            }
            if event.name.trim().is_empty() {
                return Err(PelotonError::MalformedCatalog(format!(
                    "event '{}' has an empty name",
                    event.code
                )));
            }
            if !(event.weight > 0.0 && event.weight <= 1.0) {
                return Err(PelotonError::MalformedCatalog(format!(
                    "event '{}' has weight {} outside (0, 1]",
                    event.code, event.weight
                )));
            }
        }
        Ok(Self { events })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, code: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.code.as_str() == code)
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.events.iter().position(|e| e.code.as_str() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index_of(code).is_some()
    }

    /// Version stamp of the catalog content.
    ///
    /// Equal catalogs produce equal fingerprints within a process; any
    /// change to a code, name, profile or weight changes it.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for event in &self.events {
            event.code.hash(&mut hasher);
            event.name.hash(&mut hasher);
            event.primary.hash(&mut hasher);
            event.secondary.hash(&mut hasher);
            event.weight.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// The 17 spring classics of the 2026 season.
    pub fn classics_2026() -> Self {
        use Quality::*;

        let event = |code: &str, name: &str, primary, secondary: Option<Quality>, weight| Event {
            code: EventCode::from(code),
            name: name.to_string(),
            primary,
            secondary,
            weight,
        };

        Self {
            events: vec![
                event("omloop", "Omloop Het Nieuwsblad", Cobbles, Some(Hill), 0.7),
                event("kuurne", "Kuurne-Brussel-Kuurne", Sprint, Some(Cobbles), 0.6),
                event("paris-nice", "Paris-Nice", Gc, Some(Climb), 0.3),
                event("tirreno", "Tirreno-Adriatico", Gc, Some(Climb), 0.3),
                event("strade-bianche", "Strade Bianche", Hill, Some(Punch), 0.7),
                event("milano-sanremo", "Milano-Sanremo", Sprint, Some(Punch), 0.6),
                event("brugge", "Ronde van Brugge", Sprint, Some(Cobbles), 0.4),
                event("e3", "E3 Saxo Classic", Cobbles, Some(Hill), 0.7),
                event("gent-wevelgem", "Gent-Wevelgem", Sprint, Some(Cobbles), 0.6),
                event("dwars", "Dwars door Vlaanderen", Cobbles, Some(Hill), 0.6),
                event("ronde-van-vlaanderen", "Ronde van Vlaanderen", Cobbles, Some(Hill), 0.9),
                event("scheldeprijs", "Scheldeprijs", Sprint, None, 0.5),
                event("paris-roubaix", "Paris-Roubaix", Cobbles, None, 0.9),
                event("brabantse-pijl", "Brabantse Pijl", Hill, Some(Punch), 0.5),
                event("amstel", "Amstel Gold Race", Hill, Some(Punch), 0.7),
                event("fleche-wallonne", "Waalse Pijl", Punch, Some(Climb), 0.7),
                event("luik", "Luik-Bastenaken-Luik", Punch, Some(Climb), 0.8),
            ],
        }
    }
}

impl TryFrom<Vec<Event>> for EventCatalog {
    type Error = PelotonError;

    fn try_from(events: Vec<Event>) -> Result<Self> {
        Self::new(events)
    }
}

impl From<EventCatalog> for Vec<Event> {
    fn from(catalog: EventCatalog) -> Self {
        catalog.events
    }
}

impl<'a> IntoIterator for &'a EventCatalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
