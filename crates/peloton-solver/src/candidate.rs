//! Candidate pool construction and the infeasibility checks that need no search.

use peloton_core::{InfeasibleReason, Result};
use peloton_scoring::ScoredTable;
use tracing::debug;

use crate::request::SelectionRequest;

/// One selectable table row, reduced to what the search needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// Position in the scored table.
    pub index: usize,
    pub price: u64,
    /// Total projected points in hundredths.
    pub points: i64,
}

/// Forced members plus the free candidates competing for the remaining slots.
#[derive(Debug, Clone)]
pub(crate) struct CandidatePool {
    pub forced: Vec<Candidate>,
    pub free: Vec<Candidate>,
    /// Slots left after the forced members.
    pub slots: usize,
    /// Budget left after the forced members.
    pub budget_left: u64,
}

impl CandidatePool {
    /// Applies the request to the table.
    ///
    /// Checks run in a fixed order so the reported reason is deterministic:
    /// team size, contradictory locks, unknown includes, include count,
    /// include cost, then pool size. Competitors entered in no event only
    /// reach the roster as forced includes.
    pub fn build(table: &ScoredTable, request: &SelectionRequest) -> Result<Self> {
        if request.team_size == 0 {
            return Err(InfeasibleReason::EmptyRoster.into());
        }

        if let Some(&id) = request.include.intersection(&request.exclude).next() {
            return Err(InfeasibleReason::Contradictory(id).into());
        }

        let mut forced = Vec::with_capacity(request.include.len());
        for &id in &request.include {
            let index = table
                .index_of(id)
                .ok_or(InfeasibleReason::UnknownCompetitor(id))?;
            forced.push(candidate_at(table, index));
        }

        if forced.len() > request.team_size {
            return Err(InfeasibleReason::TooManyIncludes {
                includes: forced.len(),
                team_size: request.team_size,
            }
            .into());
        }

        let forced_cost = forced
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.price));
        if forced_cost > request.budget {
            return Err(InfeasibleReason::IncludesOverBudget {
                cost: forced_cost,
                budget: request.budget,
            }
            .into());
        }

        for &id in &request.exclude {
            if !table.contains(id) {
                debug!(event = "unknown_exclude_ignored", competitor = %id);
            }
        }

        let free: Vec<Candidate> = table
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.race_count() > 0 && !request.include.contains(&c.id()) && !request.exclude.contains(&c.id())
            })
            .map(|(index, _)| candidate_at(table, index))
            .collect();

        if forced.is_empty() && free.is_empty() {
            return Err(InfeasibleReason::NoCandidates.into());
        }

        let slots = request.team_size - forced.len();
        if free.len() < slots {
            return Err(InfeasibleReason::NotEnoughCandidates {
                available: forced.len() + free.len(),
                team_size: request.team_size,
            }
            .into());
        }

        Ok(Self {
            forced,
            free,
            slots,
            budget_left: request.budget - forced_cost,
        })
    }

    /// Points already locked in by the forced members.
    pub fn forced_points(&self) -> i64 {
        self.forced.iter().map(|c| c.points).sum()
    }
}

fn candidate_at(table: &ScoredTable, index: usize) -> Candidate {
    let scored = &table.competitors()[index];
    Candidate {
        index,
        price: scored.price(),
        points: scored.total_points().hundredths(),
    }
}
