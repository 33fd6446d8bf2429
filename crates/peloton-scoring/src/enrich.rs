//! The scoring pass over a competitor table.

use std::collections::HashSet;

use peloton_core::{Competitor, EventCatalog, PelotonError, Points, Result};
use rayon::prelude::*;
use tracing::info;

use crate::cache::TableFingerprint;
use crate::projection::project_event;
use crate::scored::{ScoredCompetitor, ScoredTable};

/// Enriches every competitor with per-event and total projections.
///
/// Every record is validated before anything is scored; the first invalid
/// record aborts the pass. The output keeps input order and is identical on
/// every run for the same input.
///
/// # Errors
///
/// Returns [`PelotonError::MalformedInput`] for a duplicate id or any record
/// rejected by [`Competitor::validate`].
///
/// # Examples
///
/// ```
/// use peloton_core::{Competitor, Event, EventCatalog, Points, Quality};
///
/// let catalog = EventCatalog::new(vec![
///     Event::new("roubaix", "Paris-Roubaix", Quality::Cobbles, 1.0),
/// ]).unwrap();
/// let riders = vec![
///     Competitor::new(1, "Rider", 2_000_000)
///         .with_quality(Quality::Cobbles, 10)
///         .entered_in("roubaix"),
/// ];
///
/// let table = peloton_scoring::score(&riders, &catalog).unwrap();
/// assert_eq!(table.competitors()[0].total_points(), Points::whole(28));
/// assert_eq!(table.competitors()[0].value_score(), 14.0);
/// ```
pub fn score(table: &[Competitor], catalog: &EventCatalog) -> Result<ScoredTable> {
    validate_table(table, catalog)?;

    let scored: Vec<ScoredCompetitor> = table
        .par_iter()
        .map(|competitor| score_competitor(competitor, catalog))
        .collect();

    info!(
        event = "score",
        competitor_count = scored.len(),
        event_count = catalog.len(),
    );

    let fingerprint = TableFingerprint::of(table, catalog);
    Ok(ScoredTable::new(scored, catalog.clone(), fingerprint))
}

/// Scores a single record. The record is assumed to be valid.
pub fn score_competitor(competitor: &Competitor, catalog: &EventCatalog) -> ScoredCompetitor {
    let event_points: Vec<Points> = catalog
        .iter()
        .map(|event| project_event(competitor, event))
        .collect();
    let race_count = competitor.race_count(catalog);
    ScoredCompetitor::new(competitor.clone(), event_points, race_count)
}

fn validate_table(table: &[Competitor], catalog: &EventCatalog) -> Result<()> {
    let mut seen = HashSet::with_capacity(table.len());
    for competitor in table {
        if !seen.insert(competitor.id) {
            return Err(PelotonError::malformed(competitor.id, "id", "appears more than once"));
        }
        competitor.validate(catalog)?;
    }
    Ok(())
}
