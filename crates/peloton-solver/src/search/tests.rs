//! Cross-checks of both strategies against exhaustive enumeration.

use peloton_config::SelectionStrategy;
use peloton_core::{Event, EventCatalog, Quality};
use peloton_scoring::score;
use peloton_test::{random_market, MarketShape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::candidate::Candidate;
use crate::request::SelectionRequest;
use crate::termination::NoTermination;

fn small_catalog() -> EventCatalog {
    EventCatalog::new(vec![
        Event::new("a", "Cobbled race", Quality::Cobbles, 0.9).with_secondary(Quality::Hill),
        Event::new("b", "Bunch sprint", Quality::Sprint, 0.6),
        Event::new("c", "Hilly race", Quality::Hill, 0.7).with_secondary(Quality::Punch),
        Event::new("d", "Mountain race", Quality::Climb, 1.0).with_secondary(Quality::Gc),
    ])
    .unwrap()
}

/// Best total over every subset of exactly `slots` free candidates.
fn brute_force(pool: &CandidatePool) -> Option<i64> {
    let n = pool.free.len();
    let mut best = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() as usize != pool.slots {
            continue;
        }
        let (mut cost, mut points) = (0u64, 0i64);
        for (i, c) in pool.free.iter().enumerate() {
            if mask & (1 << i) != 0 {
                cost += c.price;
                points += c.points;
            }
        }
        if cost <= pool.budget_left && best.map_or(true, |b| points > b) {
            best = Some(points);
        }
    }
    best
}

/// Price buckets over this many decision bits fall back to branch and bound.
const TEST_CELL_LIMIT: u64 = 4_000_000;

fn run(pool: &CandidatePool, strategy: SelectionStrategy) -> Option<SearchOutcome> {
    let mut scope = SelectionScope::start();
    solve(pool, strategy, TEST_CELL_LIMIT, &NoTermination, &mut scope).unwrap()
}

/// A pool with small coprime prices so the bucket table stays tiny.
fn coprime_pool(seed: u64, n: usize, slots: usize, budget: u64) -> CandidatePool {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let free = (0..n)
        .map(|index| Candidate {
            index,
            price: rng.random_range(1..=60u64),
            points: rng.random_range(0..=5_000i64),
        })
        .collect();
    CandidatePool {
        forced: Vec::new(),
        free,
        slots,
        budget_left: budget,
    }
}

fn assert_valid(pool: &CandidatePool, outcome: &SearchOutcome) {
    assert_eq!(outcome.chosen.len(), pool.slots);
    let cost: u64 = outcome.chosen.iter().map(|&i| pool.free[i].price).sum();
    let points: i64 = outcome.chosen.iter().map(|&i| pool.free[i].points).sum();
    assert!(cost <= pool.budget_left);
    assert_eq!(points, outcome.points);
}

fn cross_check(seed: u64, shape: MarketShape, team_size: usize, budget: u64) {
    let catalog = small_catalog();
    let riders = random_market(seed, 14, &catalog, shape);
    let table = score(&riders, &catalog).unwrap();
    let request = SelectionRequest::new()
        .with_team_size(team_size)
        .with_budget(budget);
    let Ok(pool) = CandidatePool::build(&table, &request) else {
        return;
    };
    assert!(pool.free.len() <= 14);

    let expected = brute_force(&pool);
    for strategy in [SelectionStrategy::BranchAndBound, SelectionStrategy::PriceBuckets] {
        let outcome = run(&pool, strategy);
        assert_eq!(
            outcome.as_ref().map(|o| o.points),
            expected,
            "seed {seed} {shape:?} {strategy} team {team_size} budget {budget}"
        );
        if let Some(outcome) = &outcome {
            assert_valid(&pool, outcome);
        }
    }
}

#[test]
fn test_strategies_match_brute_force_on_granular_prices() {
    for seed in 0..24 {
        cross_check(seed, MarketShape::Granular, 4, 10_000_000);
        cross_check(seed, MarketShape::Granular, 6, 18_000_000);
    }
}

#[test]
fn test_strategies_match_brute_force_on_arbitrary_prices() {
    for seed in 100..124 {
        cross_check(seed, MarketShape::Arbitrary, 3, 9_000_000);
        cross_check(seed, MarketShape::Arbitrary, 5, 14_500_001);
    }
}

#[test]
fn test_price_buckets_match_brute_force_on_coprime_prices() {
    for seed in 0..40 {
        let pool = coprime_pool(seed, 13, 4, 90);
        let grid = PriceGrid::new(&pool.free, pool.slots, pool.budget_left);
        assert!(grid.decision_bits() <= TEST_CELL_LIMIT);

        let expected = brute_force(&pool);
        for strategy in [SelectionStrategy::PriceBuckets, SelectionStrategy::BranchAndBound] {
            let outcome = run(&pool, strategy);
            assert_eq!(outcome.as_ref().map(|o| o.points), expected, "seed {seed} {strategy}");
            if let Some(outcome) = &outcome {
                assert_valid(&pool, outcome);
            }
        }
    }
}

#[test]
fn test_tight_budgets_report_no_roster() {
    let catalog = small_catalog();
    let riders = random_market(7, 12, &catalog, MarketShape::Arbitrary);
    let table = score(&riders, &catalog).unwrap();
    let pool = CandidatePool::build(&table, &SelectionRequest::new().with_team_size(4).with_budget(1_000_000)).unwrap();

    // Every price is at least 500,000, so four members cost at least 2M.
    assert_eq!(run(&pool, SelectionStrategy::BranchAndBound), None);
    assert_eq!(run(&pool, SelectionStrategy::PriceBuckets), None);
}

#[test]
fn test_zero_slots_is_an_empty_completion() {
    let catalog = small_catalog();
    let riders = random_market(9, 6, &catalog, MarketShape::Granular);
    let table = score(&riders, &catalog).unwrap();
    let request = SelectionRequest::new()
        .with_team_size(1)
        .include(riders[0].id);
    let pool = CandidatePool::build(&table, &request).unwrap();

    let outcome = run(&pool, SelectionStrategy::Auto).unwrap();
    assert!(outcome.chosen.is_empty());
    assert_eq!(outcome.points, 0);
}

#[test]
fn test_price_grid_scales_by_gcd() {
    let catalog = small_catalog();
    let riders = random_market(4, 10, &catalog, MarketShape::Granular);
    let table = score(&riders, &catalog).unwrap();
    let pool = CandidatePool::build(&table, &SelectionRequest::new().with_team_size(3).with_budget(5_000_000)).unwrap();

    let grid = PriceGrid::new(&pool.free, pool.slots, pool.budget_left);
    assert_eq!(grid.unit() % 250_000, 0);
    assert!(grid.capacity() <= 5_000_000 / grid.unit());
    assert_eq!(grid.cells(), 4 * (grid.capacity() + 1));
}

#[test]
fn test_auto_falls_back_to_branch_and_bound_over_cell_limit() {
    let catalog = small_catalog();
    let riders = random_market(21, 12, &catalog, MarketShape::Arbitrary);
    let table = score(&riders, &catalog).unwrap();
    let pool = CandidatePool::build(&table, &SelectionRequest::new().with_team_size(4).with_budget(12_000_000)).unwrap();

    let mut scope = SelectionScope::start();
    let outcome = solve(&pool, SelectionStrategy::Auto, 1, &NoTermination, &mut scope).unwrap();
    let stats = scope.finish();

    assert_eq!(outcome.map(|o| o.points), brute_force(&pool));
    assert!(stats.nodes_explored > 0);
    assert_eq!(stats.table_cells, 0);
}
