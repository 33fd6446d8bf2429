//! Dynamic programming over gcd-scaled price units.

use peloton_core::Result;
use tracing::trace;

use super::SearchOutcome;
use crate::candidate::{Candidate, CandidatePool};
use crate::scope::SelectionScope;
use crate::termination::Termination;

const UNREACHABLE: i64 = i64::MIN;

/// Price scaling shared by every free candidate and the residual budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PriceGrid {
    unit: u64,
    capacity: u64,
    slots: usize,
    items: usize,
}

impl PriceGrid {
    /// Divides prices and budget by their gcd.
    ///
    /// Capacity is capped at the price of the `slots` dearest candidates,
    /// since no roster can spend more.
    pub fn new(free: &[Candidate], slots: usize, budget: u64) -> Self {
        let unit = free.iter().fold(budget, |g, c| gcd(g, c.price)).max(1);

        let mut prices: Vec<u64> = free.iter().map(|c| c.price / unit).collect();
        prices.sort_unstable_by(|a, b| b.cmp(a));
        let dearest: u64 = prices
            .iter()
            .take(slots)
            .fold(0u64, |acc, &p| acc.saturating_add(p));

        Self {
            unit,
            capacity: (budget / unit).min(dearest),
            slots,
            items: free.len(),
        }
    }

    pub fn unit(&self) -> u64 {
        self.unit
    }

    /// Budget in price units.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Cells of one `(members, units)` layer.
    pub fn cells(&self) -> u64 {
        (self.slots as u64 + 1).saturating_mul(self.capacity.saturating_add(1))
    }

    /// Take flags kept for reconstruction: one per item per cell.
    pub fn decision_bits(&self) -> u64 {
        (self.items as u64).saturating_mul(self.cells())
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `best[j][u]`: most points from exactly `j` items costing at most `u` units.
#[derive(Debug)]
pub(crate) struct PriceBuckets<'a> {
    pool: &'a CandidatePool,
    grid: PriceGrid,
}

impl<'a> PriceBuckets<'a> {
    pub fn new(pool: &'a CandidatePool, grid: PriceGrid) -> Self {
        Self { pool, grid }
    }

    pub fn solve<T: Termination>(&self, termination: &T, scope: &mut SelectionScope) -> Result<Option<SearchOutcome>> {
        let slots = self.grid.slots;
        let width = self.grid.capacity as usize + 1;
        let cells = (slots + 1) * width;
        let weights: Vec<usize> = self
            .pool
            .free
            .iter()
            .map(|c| (c.price / self.grid.unit) as usize)
            .collect();

        scope.stats_mut().table_cells = self.grid.decision_bits();

        let mut best = vec![UNREACHABLE; cells];
        best[..width].fill(0);
        let mut taken = vec![0u64; (self.pool.free.len() * cells).div_ceil(64)];

        for (k, candidate) in self.pool.free.iter().enumerate() {
            scope.check(termination)?;

            let w = weights[k];
            if w >= width {
                continue;
            }
            let top = slots.min(k + 1);
            for j in (1..=top).rev() {
                for u in (w..width).rev() {
                    let from = best[(j - 1) * width + u - w];
                    if from == UNREACHABLE {
                        continue;
                    }
                    let value = from + candidate.points;
                    let cell = j * width + u;
                    if value > best[cell] {
                        best[cell] = value;
                        let bit = k * cells + cell;
                        taken[bit / 64] |= 1 << (bit % 64);
                    }
                }
            }
        }

        let optimum = best[slots * width + width - 1];
        if optimum == UNREACHABLE {
            return Ok(None);
        }

        let mut chosen = Vec::with_capacity(slots);
        let (mut j, mut u) = (slots, width - 1);
        for k in (0..self.pool.free.len()).rev() {
            if j == 0 {
                break;
            }
            let bit = k * cells + j * width + u;
            if taken[bit / 64] & (1 << (bit % 64)) != 0 {
                chosen.push(k);
                j -= 1;
                u -= weights[k];
            }
        }
        chosen.reverse();

        trace!(event = "price_buckets_optimum", points = optimum, cells);
        Ok(Some(SearchOutcome {
            chosen,
            points: optimum,
        }))
    }
}
