//! Loading the competitor table and event catalog.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use peloton::{Competitor, Event, EventCatalog};
use tracing::debug;

use crate::cli::InputArgs;

pub fn load_riders(path: &Path) -> Result<Vec<Competitor>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading riders from {}", path.display()))?;
    let riders: Vec<Competitor> =
        serde_json::from_str(&text).with_context(|| format!("parsing riders in {}", path.display()))?;
    debug!(event = "riders_loaded", path = %path.display(), count = riders.len());
    Ok(riders)
}

pub fn load_catalog(path: Option<&Path>) -> Result<EventCatalog> {
    let Some(path) = path else {
        return Ok(EventCatalog::classics_2026());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading catalog from {}", path.display()))?;
    let events: Vec<Event> =
        serde_json::from_str(&text).with_context(|| format!("parsing catalog in {}", path.display()))?;
    let catalog = EventCatalog::new(events).with_context(|| format!("validating catalog in {}", path.display()))?;
    debug!(event = "catalog_loaded", path = %path.display(), count = catalog.len());
    Ok(catalog)
}

pub fn load(input: &InputArgs) -> Result<(Vec<Competitor>, EventCatalog)> {
    let catalog = load_catalog(input.catalog.as_deref())?;
    let riders = load_riders(&input.riders)?;
    Ok((riders, catalog))
}
