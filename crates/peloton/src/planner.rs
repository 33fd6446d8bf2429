//! The full pipeline behind a single call.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use peloton_config::PelotonConfig;
use peloton_core::{Competitor, EventCatalog, Result};
use peloton_scoring::{score, ScoredTable};
use peloton_solver::{assign_captaincy, CaptaincyPlan, Roster, RosterSelector, RosterSummary, SelectionRequest};
use tracing::info;

/// Everything produced for one season: the scored table, the optimal
/// roster, its captaincy plan and the summary.
#[derive(Debug, Clone)]
pub struct SeasonPlan {
    pub table: ScoredTable,
    pub roster: Roster,
    pub captaincy: CaptaincyPlan,
    pub summary: RosterSummary,
}

/// Scores `riders`, selects under `config` and plans captaincy.
///
/// Selection constraints, strategy and limits all come from `config`.
/// `cancel`, when given, aborts the selection once raised.
///
/// # Errors
///
/// Any error from scoring, selection or captaincy, unchanged.
///
/// # Examples
///
/// ```
/// use peloton::prelude::*;
///
/// let catalog = EventCatalog::classics_2026();
/// let riders: Vec<Competitor> = (1..=4)
///     .map(|id| {
///         Competitor::new(id, format!("Rider {id}"), id * 1_000_000)
///             .with_quality(Quality::Sprint, 7)
///             .entered_in("scheldeprijs")
///     })
///     .collect();
///
/// let config = PelotonConfig::new().with_team_size(2).with_budget(4_000_000);
/// let plan = plan_season(&riders, &catalog, &config, None).unwrap();
///
/// assert_eq!(plan.summary.team_size, 2);
/// assert!(plan.summary.budget_remaining >= 0);
/// assert_eq!(plan.summary.base_points, Points::whole(4));
/// ```
pub fn plan_season(
    riders: &[Competitor],
    catalog: &EventCatalog,
    config: &PelotonConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SeasonPlan> {
    let table = score(riders, catalog)?;

    let mut selector = RosterSelector::from_config(config);
    if let Some(flag) = cancel {
        selector = selector.with_cancel_flag(flag);
    }
    let request = SelectionRequest::from_config(&config.selection);
    let roster = selector.select(&table, &request)?;

    let captaincy = assign_captaincy(&roster, catalog)?;
    let summary = RosterSummary::new(&roster, &captaincy, config.selection.budget);

    info!(
        event = "season_planned",
        team_size = summary.team_size,
        total_cost = summary.total_cost,
        base_points = %summary.base_points,
        captaincy_bonus = %summary.captaincy_bonus,
    );

    Ok(SeasonPlan {
        table,
        roster,
        captaincy,
        summary,
    })
}
