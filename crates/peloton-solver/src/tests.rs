//! Selection, captaincy and summary tests.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use peloton_config::{PelotonConfig, SelectionStrategy};
use peloton_core::{CompetitorId, EventCatalog, InfeasibleReason, Multiplier, PelotonError, Points, Quality};
use peloton_scoring::{score, ScoredTable};
use peloton_test::{random_market, rider, single_event_catalog, three_rider_market, MarketShape};

use super::*;

fn three_rider_table() -> (EventCatalog, ScoredTable) {
    let (catalog, riders) = three_rider_market();
    let table = score(&riders, &catalog).unwrap();
    (catalog, table)
}

fn pair_request() -> SelectionRequest {
    SelectionRequest::new().with_team_size(2).with_budget(45_000_000)
}

fn infeasible(table: &ScoredTable, request: &SelectionRequest) -> InfeasibleReason {
    match RosterSelector::new().select(table, request).unwrap_err() {
        PelotonError::Infeasible(reason) => reason,
        other => panic!("unexpected error {other:?}"),
    }
}

fn ids(roster: &Roster) -> Vec<u64> {
    roster.ids().into_iter().map(|id| id.0).collect()
}

#[test]
fn test_exact_pair_beats_greedy_value_pick() {
    let (_, table) = three_rider_table();

    for strategy in [
        SelectionStrategy::Auto,
        SelectionStrategy::BranchAndBound,
        SelectionStrategy::PriceBuckets,
    ] {
        let roster = RosterSelector::new()
            .with_strategy(strategy)
            .select(&table, &pair_request())
            .unwrap();
        assert_eq!(ids(&roster), vec![1, 2], "{strategy}");
        assert_eq!(roster.total_points(), Points::whole(80));
        assert_eq!(roster.total_cost(), 45_000_000);
    }
}

#[test]
fn test_members_ordered_by_points() {
    let (_, table) = three_rider_table();
    let request = SelectionRequest::new().with_team_size(3).with_budget(60_000_000);
    let roster = RosterSelector::new().select(&table, &request).unwrap();

    assert_eq!(ids(&roster), vec![1, 2, 3]);
    let points: Vec<Points> = roster.iter().map(|m| m.total_points()).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_exclude_is_honored() {
    let (_, table) = three_rider_table();
    let roster = RosterSelector::new()
        .select(&table, &pair_request().exclude(2u64))
        .unwrap();
    assert_eq!(ids(&roster), vec![1, 3]);
    assert_eq!(roster.total_points(), Points::whole(65));
}

#[test]
fn test_unknown_exclude_is_ignored() {
    let (_, table) = three_rider_table();
    let roster = RosterSelector::new()
        .select(&table, &pair_request().exclude(99u64))
        .unwrap();
    assert_eq!(ids(&roster), vec![1, 2]);
}

#[test]
fn test_include_forces_a_worse_roster() {
    let (_, table) = three_rider_table();
    let roster = RosterSelector::new()
        .select(&table, &pair_request().include(3u64))
        .unwrap();
    assert_eq!(ids(&roster), vec![1, 3]);
}

#[test]
fn test_forced_include_without_races_is_allowed() {
    let (catalog, mut riders) = three_rider_market();
    riders.push(rider(4, 1_000_000));
    let table = score(&riders, &catalog).unwrap();

    // Without the lock rider 4 is not a candidate at all.
    let request = SelectionRequest::new().with_team_size(4).with_budget(60_000_000);
    assert_eq!(
        infeasible(&table, &request),
        InfeasibleReason::NotEnoughCandidates {
            available: 3,
            team_size: 4
        }
    );

    let roster = RosterSelector::new()
        .select(&table, &pair_request().include(4u64))
        .unwrap();
    assert_eq!(ids(&roster), vec![1, 4]);
    assert_eq!(roster.total_points(), Points::whole(50));
}

#[test]
fn test_team_size_zero_is_infeasible() {
    let (_, table) = three_rider_table();
    let request = SelectionRequest::new().with_team_size(0);
    assert_eq!(infeasible(&table, &request), InfeasibleReason::EmptyRoster);
}

#[test]
fn test_empty_pool_is_infeasible() {
    let catalog = EventCatalog::classics_2026();
    let idle = vec![rider(1, 1_000_000), rider(2, 2_000_000)];
    let table = score(&idle, &catalog).unwrap();
    let request = SelectionRequest::new().with_team_size(1);
    assert_eq!(infeasible(&table, &request), InfeasibleReason::NoCandidates);
}

#[test]
fn test_contradictory_locks() {
    let (_, table) = three_rider_table();
    let request = pair_request().include(2u64).exclude(2u64);
    assert_eq!(infeasible(&table, &request), InfeasibleReason::Contradictory(CompetitorId(2)));
}

#[test]
fn test_unknown_include() {
    let (_, table) = three_rider_table();
    let request = pair_request().include(42u64);
    assert_eq!(infeasible(&table, &request), InfeasibleReason::UnknownCompetitor(CompetitorId(42)));
}

#[test]
fn test_too_many_includes() {
    let (_, table) = three_rider_table();
    let request = SelectionRequest::new()
        .with_team_size(1)
        .with_budget(100_000_000)
        .include(1u64)
        .include(2u64);
    assert_eq!(
        infeasible(&table, &request),
        InfeasibleReason::TooManyIncludes {
            includes: 2,
            team_size: 1
        }
    );
}

#[test]
fn test_includes_over_budget() {
    let (_, table) = three_rider_table();
    let request = pair_request().with_budget(40_000_000).include(1u64).include(2u64);
    assert_eq!(
        infeasible(&table, &request),
        InfeasibleReason::IncludesOverBudget {
            cost: 45_000_000,
            budget: 40_000_000
        }
    );
}

#[test]
fn test_no_roster_within_budget() {
    let (_, table) = three_rider_table();
    let request = pair_request().with_budget(20_000_000);
    for strategy in [SelectionStrategy::BranchAndBound, SelectionStrategy::PriceBuckets] {
        let reason = match RosterSelector::new()
            .with_strategy(strategy)
            .select(&table, &request)
            .unwrap_err()
        {
            PelotonError::Infeasible(reason) => reason,
            other => panic!("unexpected error {other:?}"),
        };
        assert_eq!(
            reason,
            InfeasibleReason::NoFeasibleRoster {
                team_size: 2,
                budget: 20_000_000
            }
        );
    }
}

#[test]
fn test_random_market_roster_respects_constraints() {
    let catalog = EventCatalog::classics_2026();
    let riders = random_market(17, 120, &catalog, MarketShape::Granular);
    let table = score(&riders, &catalog).unwrap();

    let request = SelectionRequest::new().include(5u64).include(9u64).exclude(1u64).exclude(2u64);
    let roster = RosterSelector::new().select(&table, &request).unwrap();

    assert_eq!(roster.len(), 20);
    assert!(roster.total_cost() <= 50_000_000);
    assert!(roster.contains(CompetitorId(5)) && roster.contains(CompetitorId(9)));
    assert!(!roster.contains(CompetitorId(1)) && !roster.contains(CompetitorId(2)));
    assert!(roster.stats().table_cells > 0);
}

#[test]
fn test_strategies_agree_on_classics_market() {
    let catalog = EventCatalog::classics_2026();
    let riders = random_market(29, 30, &catalog, MarketShape::Granular);
    let table = score(&riders, &catalog).unwrap();
    let request = SelectionRequest::new().with_team_size(6).with_budget(15_000_000);

    let buckets = RosterSelector::new()
        .with_strategy(SelectionStrategy::PriceBuckets)
        .select(&table, &request)
        .unwrap();
    let branch = RosterSelector::new()
        .with_strategy(SelectionStrategy::BranchAndBound)
        .select(&table, &request)
        .unwrap();

    assert_eq!(buckets.total_points(), branch.total_points());
    assert!(branch.total_cost() <= 15_000_000);
    assert!(branch.stats().nodes_explored > 0);
}

#[test]
fn test_node_limit_times_out_without_a_roster() {
    let (_, table) = three_rider_table();
    let selector = RosterSelector::new()
        .with_strategy(SelectionStrategy::BranchAndBound)
        .with_termination(NodeCountTermination::new(1));

    let err = selector.select(&table, &pair_request()).unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_configured_limits_and_cancel_flag() {
    let (_, table) = three_rider_table();

    let config = PelotonConfig::new()
        .with_strategy(SelectionStrategy::BranchAndBound)
        .with_node_count_limit(1);
    let err = RosterSelector::from_config(&config)
        .select(&table, &pair_request())
        .unwrap_err();
    assert!(err.is_timeout());

    let flag = Arc::new(AtomicBool::new(true));
    let err = RosterSelector::from_config(&PelotonConfig::new())
        .with_cancel_flag(flag)
        .select(&table, &pair_request())
        .unwrap_err();
    assert!(err.is_timeout());

    let roster = RosterSelector::from_config(&PelotonConfig::new())
        .with_cancel_flag(Arc::new(AtomicBool::new(false)))
        .select(&table, &pair_request())
        .unwrap();
    assert_eq!(ids(&roster), vec![1, 2]);
}

#[test]
fn test_captaincy_on_optimal_pair() {
    let (catalog, table) = three_rider_table();
    let roster = RosterSelector::new().select(&table, &pair_request()).unwrap();
    let plan = assign_captaincy(&roster, &catalog).unwrap();

    let codes: Vec<&str> = plan.iter().map(|a| a.event.as_str()).collect();
    assert_eq!(codes, vec!["cobbles-race", "sprint-race", "hill-race"]);

    let cobbles = plan.get("cobbles-race").unwrap();
    assert_eq!(cobbles.entries[0].competitor, CompetitorId(1));
    assert_eq!(cobbles.entries[0].boosted_points, Points::whole(84));
    assert_eq!(cobbles.entries[1].multiplier, Multiplier::SECOND);
    assert_eq!(cobbles.entries[1].boosted_points, Points::from_hundredths(3750));

    // Equal sprint projections rank by id.
    let sprint = plan.get("sprint-race").unwrap();
    let ranked: Vec<u64> = sprint.entries.iter().map(|e| e.competitor.0).collect();
    assert_eq!(ranked, vec![1, 2]);
    assert_eq!(sprint.boosted_total(), Points::from_hundredths(8250));

    let hill = plan.get("hill-race").unwrap();
    assert_eq!(hill.entries.len(), 1);
    assert_eq!(hill.base_total(), Points::whole(7));

    assert_eq!(plan.season_base_points(), Points::whole(80));
    assert_eq!(plan.season_boosted_points(), Points::whole(225));
    assert_eq!(plan.bonus(), Points::whole(145));
}

#[test]
fn test_event_without_participants_is_empty() {
    let (catalog, table) = three_rider_table();
    let roster = Roster::from_ids(&table, [CompetitorId(3)]).unwrap();
    let plan = assign_captaincy(&roster, &catalog).unwrap();

    assert!(plan.get("sprint-race").unwrap().entries.is_empty());
    assert!(plan.get("hill-race").unwrap().captains().is_empty());
    assert_eq!(plan.bonus(), Points::whole(30));
}

#[test]
fn test_multipliers_do_not_drift_under_ties() {
    let catalog = single_event_catalog(Quality::Cobbles, None, 1.0);
    let riders: Vec<_> = (1..=5)
        .rev()
        .map(|id| rider(id, 1_000_000).with_quality(Quality::Cobbles, 8).entered_in("race"))
        .collect();
    let table = score(&riders, &catalog).unwrap();
    let roster = Roster::from_ids(&table, table.iter().map(|c| c.id())).unwrap();
    let plan = assign_captaincy(&roster, &catalog).unwrap();

    let entries = &plan.assignments()[0].entries;
    let multipliers: Vec<f64> = entries.iter().map(|e| e.multiplier.as_f64()).collect();
    assert_eq!(multipliers, vec![3.0, 2.5, 2.0, 1.0, 1.0]);
    let ranked: Vec<u64> = entries.iter().map(|e| e.competitor.0).collect();
    assert_eq!(ranked, vec![1, 2, 3, 4, 5]);
    let ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert_eq!(plan.assignments()[0].captains().len(), 3);
}

#[test]
fn test_captaincy_rejects_other_catalog() {
    let (_, table) = three_rider_table();
    let roster = Roster::from_ids(&table, [CompetitorId(1)]).unwrap();
    let err = assign_captaincy(&roster, &EventCatalog::classics_2026()).unwrap_err();
    assert!(matches!(err, PelotonError::MalformedCatalog(_)));
}

#[test]
fn test_manual_roster_from_ids() {
    let (_, table) = three_rider_table();

    let roster = Roster::from_ids(&table, [CompetitorId(3), CompetitorId(1), CompetitorId(3)]).unwrap();
    assert_eq!(ids(&roster), vec![1, 3]);
    assert_eq!(roster.stats(), &SelectionStats::default());

    let err = Roster::from_ids(&table, [CompetitorId(8)]).unwrap_err();
    assert_eq!(err.infeasible_reason(), Some(&InfeasibleReason::UnknownCompetitor(CompetitorId(8))));

    let err = Roster::from_ids(&table, Vec::<CompetitorId>::new()).unwrap_err();
    assert_eq!(err.infeasible_reason(), Some(&InfeasibleReason::EmptyRoster));
}

#[test]
fn test_summary_and_comparison() {
    let (catalog, table) = three_rider_table();

    let optimal = RosterSelector::new().select(&table, &pair_request()).unwrap();
    let optimal_plan = assign_captaincy(&optimal, &catalog).unwrap();
    let optimal_summary = RosterSummary::new(&optimal, &optimal_plan, 45_000_000);

    assert_eq!(optimal_summary.team_size, 2);
    assert_eq!(optimal_summary.budget_remaining, 0);
    assert_eq!(optimal_summary.base_points, Points::whole(80));
    assert_eq!(optimal_summary.captaincy_points, Points::whole(225));
    assert_eq!(optimal_summary.captaincy_bonus, Points::whole(145));
    assert_eq!(optimal_summary.average_races, 2.5);
    assert_eq!(optimal_summary.category_distribution.get("Cobbles"), Some(&1));
    assert_eq!(optimal_summary.category_distribution.get("Sprinter"), Some(&1));

    let manual = Roster::from_ids(&table, [CompetitorId(1), CompetitorId(2), CompetitorId(3)]).unwrap();
    let manual_plan = assign_captaincy(&manual, &catalog).unwrap();
    let manual_summary = RosterSummary::new(&manual, &manual_plan, 45_000_000);
    assert_eq!(manual_summary.budget_remaining, -10_000_000);
    assert_eq!(manual_summary.budget_remaining_millions(), -10.0);

    let pair = Roster::from_ids(&table, [CompetitorId(1), CompetitorId(3)]).unwrap();
    let pair_plan = assign_captaincy(&pair, &catalog).unwrap();
    let pair_summary = RosterSummary::new(&pair, &pair_plan, 45_000_000);
    assert_eq!(optimal_summary.points_delta(&pair_summary), Points::from_hundredths(3750));
}
