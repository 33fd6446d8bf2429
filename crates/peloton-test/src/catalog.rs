//! Event catalog fixtures.

use peloton_core::{Event, EventCatalog, Quality};

/// Three full-weight events, each on a single dimension with no secondary.
///
/// Codes: `"cobbles-race"` (cobbles), `"sprint-race"` (sprint),
/// `"hill-race"` (hill). A rating `r` entered in one of them yields a race
/// score of exactly `r * 0.7`.
pub fn three_event_catalog() -> EventCatalog {
    EventCatalog::new(vec![
        Event::new("cobbles-race", "Cobbled Classic", Quality::Cobbles, 1.0),
        Event::new("sprint-race", "Sprinters Classic", Quality::Sprint, 1.0),
        Event::new("hill-race", "Hilly Classic", Quality::Hill, 1.0),
    ])
    .expect("fixture catalog is valid")
}

/// A one-event catalog with code `"race"`.
pub fn single_event_catalog(primary: Quality, secondary: Option<Quality>, weight: f64) -> EventCatalog {
    let mut event = Event::new("race", "Race", primary, weight);
    event.secondary = secondary;
    EventCatalog::new(vec![event]).expect("fixture catalog is valid")
}
