//! The selected roster.

use std::collections::{BTreeMap, BTreeSet};

use peloton_core::{CompetitorId, InfeasibleReason, PelotonError, Points, Result};
use peloton_scoring::{ScoredCompetitor, ScoredTable};

use crate::stats::SelectionStats;

/// A fixed set of scored competitors.
///
/// Members are ordered by total projected points, highest first, then by
/// id. The order is for display; membership is what the selector decides.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    members: Vec<ScoredCompetitor>,
    total_cost: u64,
    total_points: Points,
    catalog_fingerprint: u64,
    stats: SelectionStats,
}

impl Roster {
    pub(crate) fn new(mut members: Vec<ScoredCompetitor>, catalog_fingerprint: u64, stats: SelectionStats) -> Self {
        members.sort_by(|a, b| b.total_points().cmp(&a.total_points()).then(a.id().cmp(&b.id())));
        let total_cost = members.iter().map(|m| m.price()).sum();
        let total_points = members.iter().map(|m| m.total_points()).sum();
        Self {
            members,
            total_cost,
            total_points,
            catalog_fingerprint,
            stats,
        }
    }

    /// Builds a hand-picked roster from explicit ids.
    ///
    /// No budget or size constraint is applied, so the result can be
    /// compared against an optimal roster. Repeated ids count once.
    ///
    /// # Errors
    ///
    /// [`InfeasibleReason::EmptyRoster`] for no ids and
    /// [`InfeasibleReason::UnknownCompetitor`] for an id missing from `table`.
    pub fn from_ids<I>(table: &ScoredTable, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = CompetitorId>,
    {
        let ids: BTreeSet<CompetitorId> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(InfeasibleReason::EmptyRoster.into());
        }
        let members = ids
            .into_iter()
            .map(|id| {
                table
                    .get(id)
                    .cloned()
                    .ok_or(PelotonError::from(InfeasibleReason::UnknownCompetitor(id)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(members, table.catalog().fingerprint(), SelectionStats::default()))
    }

    pub fn members(&self) -> &[ScoredCompetitor] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCompetitor> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Sum of the members' total projected points.
    pub fn total_points(&self) -> Points {
        self.total_points
    }

    /// Fingerprint of the catalog the members were scored against.
    pub fn catalog_fingerprint(&self) -> u64 {
        self.catalog_fingerprint
    }

    /// Search counters; all zero for a hand-picked roster.
    pub fn stats(&self) -> &SelectionStats {
        &self.stats
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }

    /// Member ids in roster order.
    pub fn ids(&self) -> Vec<CompetitorId> {
        self.members.iter().map(|m| m.id()).collect()
    }

    /// Mean number of events entered per member.
    pub fn average_races(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let races: usize = self.members.iter().map(|m| m.race_count()).sum();
        races as f64 / self.members.len() as f64
    }

    /// Member count per category label.
    pub fn category_distribution(&self) -> BTreeMap<String, usize> {
        let mut distribution = BTreeMap::new();
        for member in &self.members {
            *distribution
                .entry(member.competitor().category.clone())
                .or_insert(0) += 1;
        }
        distribution
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a ScoredCompetitor;
    type IntoIter = std::slice::Iter<'a, ScoredCompetitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
