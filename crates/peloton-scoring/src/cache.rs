//! Caller-owned cache of the scoring pass.
//!
//! The cache holds at most one scored table, keyed by a fingerprint of the
//! competitor table content and the catalog version. A changed input is
//! detected on lookup; [`ScoreCache::invalidate`] drops the entry wholesale.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use peloton_core::{Competitor, EventCatalog, Result};
use tracing::{debug, info};

use crate::enrich::score;
use crate::scored::ScoredTable;

/// Content hash of a competitor table scored against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableFingerprint(u64);

impl TableFingerprint {
    pub fn of(table: &[Competitor], catalog: &EventCatalog) -> Self {
        let mut hasher = DefaultHasher::new();
        catalog.fingerprint().hash(&mut hasher);
        table.len().hash(&mut hasher);
        for competitor in table {
            competitor.hash(&mut hasher);
        }
        TableFingerprint(hasher.finish())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TableFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Read-through cache for [`score`].
///
/// Mutation goes through `&mut self`, so there is a single writer at a time.
///
/// # Examples
///
/// ```
/// use peloton_core::{Competitor, EventCatalog};
/// use peloton_scoring::ScoreCache;
///
/// let catalog = EventCatalog::classics_2026();
/// let riders = vec![Competitor::new(1, "Rider", 1_000_000).entered_in("e3")];
///
/// let mut cache = ScoreCache::new();
/// cache.get_or_score(&riders, &catalog).unwrap();
/// cache.get_or_score(&riders, &catalog).unwrap();
///
/// assert_eq!(cache.misses(), 1);
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScoreCache {
    entry: Option<ScoredTable>,
    hits: u64,
    misses: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for this input, scoring it on a miss.
    ///
    /// A stale entry is dropped before rescoring, so a failed rescore
    /// leaves the cache empty.
    pub fn get_or_score(&mut self, table: &[Competitor], catalog: &EventCatalog) -> Result<&ScoredTable> {
        let key = TableFingerprint::of(table, catalog);

        let scored = match self.entry.take() {
            Some(cached) if cached.fingerprint() == key => {
                self.hits += 1;
                debug!(event = "score_cache_hit", fingerprint = %key);
                cached
            }
            _ => {
                self.misses += 1;
                info!(event = "score_cache_refresh", fingerprint = %key);
                score(table, catalog)?
            }
        };

        Ok(self.entry.insert(scored))
    }

    /// The cached table, if any.
    pub fn cached(&self) -> Option<&ScoredTable> {
        self.entry.as_ref()
    }

    /// Drops the cached table.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            debug!(event = "score_cache_invalidate");
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
