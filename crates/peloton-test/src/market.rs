//! Hand-built competitor tables.

use peloton_core::{Competitor, EventCatalog, Quality};

use crate::catalog::three_event_catalog;

/// A bare competitor with a name derived from its id.
pub fn rider(id: u64, price: u64) -> Competitor {
    Competitor::new(id, format!("Rider {id}"), price)
}

/// Three competitors whose optimal pair is not the greedy pick.
///
/// Against [`three_event_catalog`]:
///
/// | id | price | total points |
/// |----|-------|--------------|
/// | 1  | 30M   | 50 (28 + 15 + 7) |
/// | 2  | 15M   | 30 (15 + 15) |
/// | 3  | 10M   | 15 |
///
/// With team size 2 and budget 45M the optimum is {1, 2} for 80 points.
pub fn three_rider_market() -> (EventCatalog, Vec<Competitor>) {
    let catalog = three_event_catalog();
    let riders = vec![
        rider(1, 30_000_000)
            .with_category("Cobbles")
            .with_quality(Quality::Cobbles, 10)
            .with_quality(Quality::Sprint, 8)
            .with_quality(Quality::Hill, 5)
            .entered_in("cobbles-race")
            .entered_in("sprint-race")
            .entered_in("hill-race"),
        rider(2, 15_000_000)
            .with_category("Sprinter")
            .with_quality(Quality::Cobbles, 8)
            .with_quality(Quality::Sprint, 8)
            .entered_in("cobbles-race")
            .entered_in("sprint-race"),
        rider(3, 10_000_000)
            .with_category("Cobbles")
            .with_quality(Quality::Cobbles, 8)
            .entered_in("cobbles-race"),
    ];
    (catalog, riders)
}
