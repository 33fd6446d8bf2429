//! Competitors enriched with their projections.

use std::cmp::Ordering;
use std::collections::HashMap;

use peloton_core::{Competitor, CompetitorId, EventCatalog, Points};

use crate::cache::TableFingerprint;

/// A competitor plus the projections derived from it.
///
/// The derived fields are private: they only ever come out of
/// [`score`](crate::score) and cannot be edited by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCompetitor {
    competitor: Competitor,
    event_points: Vec<Points>,
    total_points: Points,
    value_score: f64,
    race_count: usize,
}

impl ScoredCompetitor {
    pub(crate) fn new(competitor: Competitor, event_points: Vec<Points>, race_count: usize) -> Self {
        let total_points: Points = event_points.iter().sum();
        let price_m = competitor.price_millions();
        let value_score = if price_m > 0.0 {
            total_points.as_f64() / price_m
        } else {
            0.0
        };
        Self {
            competitor,
            event_points,
            total_points,
            value_score,
            race_count,
        }
    }

    #[inline]
    pub fn competitor(&self) -> &Competitor {
        &self.competitor
    }

    #[inline]
    pub fn id(&self) -> CompetitorId {
        self.competitor.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.competitor.name
    }

    #[inline]
    pub fn price(&self) -> u64 {
        self.competitor.price
    }

    /// Projected points per event, in catalog order.
    #[inline]
    pub fn event_points(&self) -> &[Points] {
        &self.event_points
    }

    /// Projected points for the event at `index` in the catalog.
    pub fn points_at(&self, index: usize) -> Points {
        self.event_points.get(index).copied().unwrap_or(Points::ZERO)
    }

    /// Sum of the per-event projections.
    #[inline]
    pub fn total_points(&self) -> Points {
        self.total_points
    }

    /// Total projected points per million of price.
    #[inline]
    pub fn value_score(&self) -> f64 {
        self.value_score
    }

    /// Number of catalog events entered.
    #[inline]
    pub fn race_count(&self) -> usize {
        self.race_count
    }
}

/// Display-side filter over a scored table.
///
/// # Examples
///
/// ```
/// use peloton_scoring::CompetitorFilter;
///
/// let filter = CompetitorFilter::new()
///     .with_category("Sprinter")
///     .with_price_range(0, 2_000_000)
///     .with_min_races(3);
/// assert_eq!(filter.min_races, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompetitorFilter {
    /// Accepted categories; empty accepts all.
    pub categories: Vec<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_races: usize,
}

impl CompetitorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn with_min_races(mut self, min_races: usize) -> Self {
        self.min_races = min_races;
        self
    }

    pub fn matches(&self, scored: &ScoredCompetitor) -> bool {
        let c = scored.competitor();
        (self.categories.is_empty() || self.categories.iter().any(|cat| *cat == c.category))
            && self.min_price.map_or(true, |min| c.price >= min)
            && self.max_price.map_or(true, |max| c.price <= max)
            && scored.race_count() >= self.min_races
    }
}

/// The enriched candidate table produced by [`score`](crate::score).
#[derive(Debug, Clone)]
pub struct ScoredTable {
    competitors: Vec<ScoredCompetitor>,
    index: HashMap<CompetitorId, usize>,
    catalog: EventCatalog,
    fingerprint: TableFingerprint,
}

impl ScoredTable {
    pub(crate) fn new(
        competitors: Vec<ScoredCompetitor>,
        catalog: EventCatalog,
        fingerprint: TableFingerprint,
    ) -> Self {
        let index = competitors
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), i))
            .collect();
        Self {
            competitors,
            index,
            catalog,
            fingerprint,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCompetitor> {
        self.competitors.iter()
    }

    /// Competitors in input order.
    pub fn competitors(&self) -> &[ScoredCompetitor] {
        &self.competitors
    }

    pub fn get(&self, id: CompetitorId) -> Option<&ScoredCompetitor> {
        self.index.get(&id).map(|&i| &self.competitors[i])
    }

    /// Position of `id` in input order.
    pub fn index_of(&self, id: CompetitorId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.index.contains_key(&id)
    }

    /// The catalog the table was scored against.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn fingerprint(&self) -> TableFingerprint {
        self.fingerprint
    }

    /// The `n` competitors with the most projected points.
    pub fn top_by_points(&self, n: usize) -> Vec<&ScoredCompetitor> {
        let mut ranked: Vec<_> = self.competitors.iter().collect();
        ranked.sort_by(|a, b| b.total_points().cmp(&a.total_points()).then(a.id().cmp(&b.id())));
        ranked.truncate(n);
        ranked
    }

    /// The `n` best points-per-million competitors entered in at least one event.
    pub fn top_by_value(&self, n: usize) -> Vec<&ScoredCompetitor> {
        let mut ranked: Vec<_> = self
            .competitors
            .iter()
            .filter(|c| c.race_count() > 0)
            .collect();
        ranked.sort_by(|a, b| {
            b.value_score()
                .partial_cmp(&a.value_score())
                .unwrap_or(Ordering::Equal)
                .then(a.id().cmp(&b.id()))
        });
        ranked.truncate(n);
        ranked
    }

    pub fn filter(&self, filter: &CompetitorFilter) -> Vec<&ScoredCompetitor> {
        self.competitors.iter().filter(|c| filter.matches(c)).collect()
    }
}

impl<'a> IntoIterator for &'a ScoredTable {
    type Item = &'a ScoredCompetitor;
    type IntoIter = std::slice::Iter<'a, ScoredCompetitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.competitors.iter()
    }
}
