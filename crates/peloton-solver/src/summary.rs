//! Roster summaries for display and comparison.

use std::collections::BTreeMap;

use peloton_core::Points;

use crate::captaincy::CaptaincyPlan;
use crate::roster::Roster;

/// Headline figures for one roster and its captaincy plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub team_size: usize,
    pub total_cost: u64,
    pub budget: u64,
    /// Negative when a hand-picked roster overspends.
    pub budget_remaining: i64,
    pub base_points: Points,
    pub captaincy_points: Points,
    pub captaincy_bonus: Points,
    pub average_races: f64,
    pub category_distribution: BTreeMap<String, usize>,
}

impl RosterSummary {
    pub fn new(roster: &Roster, plan: &CaptaincyPlan, budget: u64) -> Self {
        let total_cost = roster.total_cost();
        Self {
            team_size: roster.len(),
            total_cost,
            budget,
            budget_remaining: budget as i64 - total_cost as i64,
            base_points: roster.total_points(),
            captaincy_points: plan.season_boosted_points(),
            captaincy_bonus: plan.bonus(),
            average_races: roster.average_races(),
            category_distribution: roster.category_distribution(),
        }
    }

    /// Remaining budget in millions.
    pub fn budget_remaining_millions(&self) -> f64 {
        self.budget_remaining as f64 / 1_000_000.0
    }

    /// Captaincy-adjusted points this roster gains over `other`.
    pub fn points_delta(&self, other: &RosterSummary) -> Points {
        self.captaincy_points - other.captaincy_points
    }
}
