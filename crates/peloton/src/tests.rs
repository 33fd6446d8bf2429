//! End-to-end pipeline tests.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use peloton_test::three_rider_market;

use super::*;

fn pair_config() -> PelotonConfig {
    PelotonConfig::new().with_team_size(2).with_budget(45_000_000)
}

#[test]
fn test_plan_season_end_to_end() {
    let (catalog, riders) = three_rider_market();
    let plan = plan_season(&riders, &catalog, &pair_config(), None).unwrap();

    assert_eq!(plan.table.len(), 3);
    assert_eq!(plan.roster.ids(), vec![CompetitorId(1), CompetitorId(2)]);
    assert_eq!(plan.summary.base_points, Points::whole(80));
    assert_eq!(plan.summary.captaincy_bonus, Points::whole(145));
    assert_eq!(plan.captaincy.assignments().len(), catalog.len());
}

#[test]
fn test_plan_season_honors_configured_locks() {
    let (catalog, riders) = three_rider_market();
    let config = pair_config().with_exclude(2u64);
    let plan = plan_season(&riders, &catalog, &config, None).unwrap();
    assert_eq!(plan.roster.ids(), vec![CompetitorId(1), CompetitorId(3)]);

    let config = pair_config().with_include(3u64).with_exclude(3u64);
    let err = plan_season(&riders, &catalog, &config, None).unwrap_err();
    assert_eq!(
        err.infeasible_reason(),
        Some(&InfeasibleReason::Contradictory(CompetitorId(3)))
    );
}

#[test]
fn test_plan_season_cancelled() {
    let (catalog, riders) = three_rider_market();
    let cancel = Arc::new(AtomicBool::new(true));
    let err = plan_season(&riders, &catalog, &pair_config(), Some(cancel)).unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_free_functions_match_pipeline() {
    let (catalog, riders) = three_rider_market();
    let table = score(&riders, &catalog).unwrap();
    let roster = select(&table, &SelectionRequest::from_config(&pair_config().selection)).unwrap();
    let plan = assign_captaincy(&roster, &catalog).unwrap();

    let pipeline = plan_season(&riders, &catalog, &pair_config(), None).unwrap();
    assert_eq!(roster.ids(), pipeline.roster.ids());
    assert_eq!(plan, pipeline.captaincy);
}

#[test]
fn test_malformed_input_stops_the_pipeline() {
    let (catalog, mut riders) = three_rider_market();
    riders[0].price = 0;
    let err = plan_season(&riders, &catalog, &pair_config(), None).unwrap_err();
    assert!(matches!(err, PelotonError::MalformedInput { field: "price", .. }));
}
