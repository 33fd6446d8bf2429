//! Terminal and JSON rendering.

use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use peloton::{CaptaincyPlan, EventAssignment, Roster, RosterSummary, ScoredCompetitor};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompetitorView {
    pub id: u64,
    pub name: String,
    pub team: String,
    pub category: String,
    pub price: u64,
    pub total_points: f64,
    pub value_score: f64,
    pub race_count: usize,
}

impl From<&ScoredCompetitor> for CompetitorView {
    fn from(scored: &ScoredCompetitor) -> Self {
        let c = scored.competitor();
        Self {
            id: c.id.0,
            name: c.name.clone(),
            team: c.team.clone(),
            category: c.category.clone(),
            price: c.price,
            total_points: scored.total_points().as_f64(),
            value_score: scored.value_score(),
            race_count: scored.race_count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaptainView {
    pub rank: usize,
    pub id: u64,
    pub name: String,
    pub multiplier: f64,
    pub base_points: f64,
    pub boosted_points: f64,
}

#[derive(Debug, Serialize)]
pub struct EventView {
    pub event: String,
    pub event_name: String,
    pub entries: Vec<CaptainView>,
    pub boosted_total: f64,
}

impl From<&EventAssignment> for EventView {
    fn from(assignment: &EventAssignment) -> Self {
        Self {
            event: assignment.event.to_string(),
            event_name: assignment.event_name.clone(),
            entries: assignment
                .entries
                .iter()
                .map(|e| CaptainView {
                    rank: e.rank,
                    id: e.competitor.0,
                    name: e.name.clone(),
                    multiplier: e.multiplier.as_f64(),
                    base_points: e.base_points.as_f64(),
                    boosted_points: e.boosted_points.as_f64(),
                })
                .collect(),
            boosted_total: assignment.boosted_total().as_f64(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub team_size: usize,
    pub total_cost: u64,
    pub budget: u64,
    pub budget_remaining: i64,
    pub base_points: f64,
    pub captaincy_points: f64,
    pub captaincy_bonus: f64,
    pub average_races: f64,
    pub category_distribution: BTreeMap<String, usize>,
}

impl From<&RosterSummary> for SummaryView {
    fn from(s: &RosterSummary) -> Self {
        Self {
            team_size: s.team_size,
            total_cost: s.total_cost,
            budget: s.budget,
            budget_remaining: s.budget_remaining,
            base_points: s.base_points.as_f64(),
            captaincy_points: s.captaincy_points.as_f64(),
            captaincy_bonus: s.captaincy_bonus.as_f64(),
            average_races: s.average_races,
            category_distribution: s.category_distribution.clone(),
        }
    }
}

/// Everything `optimize --json` prints.
#[derive(Debug, Serialize)]
pub struct OptimizeView {
    pub roster: Vec<CompetitorView>,
    pub captaincy: Vec<EventView>,
    pub summary: SummaryView,
}

impl OptimizeView {
    pub fn new(roster: &Roster, plan: &CaptaincyPlan, summary: &RosterSummary) -> Self {
        Self {
            roster: roster.iter().map(CompetitorView::from).collect(),
            captaincy: plan.iter().map(EventView::from).collect(),
            summary: SummaryView::from(summary),
        }
    }
}

fn millions(units: u64) -> String {
    format!("{:.2}M", units as f64 / 1_000_000.0)
}

pub fn print_competitors(title: &str, competitors: &[&ScoredCompetitor]) {
    println!("{}", title.bold());
    println!(
        "{}",
        format!(
            "{:>5}  {:<28} {:<12} {:>8} {:>8} {:>7} {:>5}",
            "id", "name", "category", "price", "points", "value", "races"
        )
        .dimmed()
    );
    for c in competitors {
        println!(
            "{:>5}  {} {:<12} {:>8} {} {:>7.2} {:>5}",
            c.id(),
            format!("{:<28}", c.name()).cyan(),
            c.competitor().category,
            millions(c.price()),
            format!("{:>8.2}", c.total_points().as_f64()).green(),
            c.value_score(),
            c.race_count(),
        );
    }
}

pub fn print_roster(roster: &Roster) {
    let members: Vec<&ScoredCompetitor> = roster.iter().collect();
    print_competitors("Optimal roster", &members);
}

pub fn print_captaincy(plan: &CaptaincyPlan) {
    println!();
    println!("{}", "Captaincy".bold());
    for assignment in plan {
        let captains: Vec<String> = assignment
            .captains()
            .iter()
            .map(|e| format!("{} {} ({})", e.multiplier, e.name, e.boosted_points))
            .collect();
        let line = if captains.is_empty() {
            "no roster riders entered".dimmed().to_string()
        } else {
            captains.join(", ")
        };
        println!("  {} {}", format!("{:<22}", assignment.event_name).yellow(), line);
    }
}

pub fn print_summary(summary: &RosterSummary) {
    println!();
    println!("{}", "Summary".bold());
    println!("  riders            {}", summary.team_size);
    println!(
        "  cost              {} of {}",
        millions(summary.total_cost),
        millions(summary.budget)
    );
    let remaining = format!("{:.2}M", summary.budget_remaining_millions());
    if summary.budget_remaining < 0 {
        println!("  remaining         {}", remaining.red());
    } else {
        println!("  remaining         {}", remaining);
    }
    println!("  projected points  {}", summary.base_points);
    println!(
        "  with captaincy    {} ({})",
        summary.captaincy_points.green(),
        format!("+{}", summary.captaincy_bonus).green()
    );
    println!("  races per rider   {:.1}", summary.average_races);
    let categories: Vec<String> = summary
        .category_distribution
        .iter()
        .map(|(category, count)| format!("{category} {count}"))
        .collect();
    println!("  categories        {}", categories.join(", "));
}
