//! Optimistic bounds for branch-and-bound pruning.
//!
//! Relaxing the budget with a multiplier `lambda >= 0` gives, for any
//! suffix of candidates, `lambda * budget + sum of the top r reduced values
//! (points - lambda * price)` as an upper bound on the best completion of
//! `r` members. The multiplier is fixed once at the root by minimizing that
//! dual; candidates are then searched in descending reduced value so the
//! top r of any suffix are its first r entries.

use crate::candidate::Candidate;

const DUAL_ITERATIONS: usize = 200;

/// Bound slack absorbing floating-point error in the dual.
const BOUND_EPSILON: f64 = 1e-6;

/// Suffix tables over candidates in search order.
#[derive(Debug, Clone)]
pub(crate) struct LagrangianBounder {
    lambda: f64,
    slots: usize,
    /// `min_cost[i * (slots + 1) + r]`: cost of the `r` cheapest in `i..`.
    min_cost: Vec<u64>,
    /// `max_points[i * (slots + 1) + r]`: points of the `r` best in `i..`.
    max_points: Vec<i64>,
    /// Prefix sums of reduced values in search order.
    reduced_prefix: Vec<f64>,
}

impl LagrangianBounder {
    /// Builds the tables for candidates already sorted by [`Self::order`].
    pub fn new(ordered: &[Candidate], slots: usize, lambda: f64) -> Self {
        let n = ordered.len();
        let stride = slots + 1;
        let mut min_cost = vec![u64::MAX; (n + 1) * stride];
        let mut max_points = vec![i64::MIN; (n + 1) * stride];

        let mut prices: Vec<u64> = Vec::with_capacity(n);
        let mut points: Vec<i64> = Vec::with_capacity(n);
        min_cost[n * stride] = 0;
        max_points[n * stride] = 0;

        for i in (0..n).rev() {
            let c = &ordered[i];
            let at = prices.partition_point(|&p| p <= c.price);
            prices.insert(at, c.price);
            let at = points.partition_point(|&p| p >= c.points);
            points.insert(at, c.points);

            let (mut cost, mut pts) = (0u64, 0i64);
            min_cost[i * stride] = 0;
            max_points[i * stride] = 0;
            for r in 1..=slots.min(prices.len()) {
                cost = cost.saturating_add(prices[r - 1]);
                pts += points[r - 1];
                min_cost[i * stride + r] = cost;
                max_points[i * stride + r] = pts;
            }
        }

        let mut reduced_prefix = Vec::with_capacity(n + 1);
        reduced_prefix.push(0.0);
        let mut acc = 0.0;
        for c in ordered {
            acc += reduced(c, lambda);
            reduced_prefix.push(acc);
        }

        Self {
            lambda,
            slots,
            min_cost,
            max_points,
            reduced_prefix,
        }
    }

    /// Minimizes the Lagrangian dual over `lambda` by ternary search.
    ///
    /// The dual is convex and piecewise linear in `lambda`; past the largest
    /// points value every pairwise order is decided by price alone, so the
    /// search interval is `[0, max points]`.
    pub fn root_multiplier(free: &[Candidate], slots: usize, budget: u64) -> f64 {
        let upper = free.iter().map(|c| c.points).max().unwrap_or(0).max(1) as f64;
        let mut scratch: Vec<f64> = Vec::with_capacity(free.len());
        let mut dual = |lambda: f64| {
            scratch.clear();
            scratch.extend(free.iter().map(|c| reduced(c, lambda)));
            scratch.sort_unstable_by(|a, b| b.total_cmp(a));
            lambda * budget as f64 + scratch.iter().take(slots).sum::<f64>()
        };

        let (mut lo, mut hi) = (0.0f64, upper);
        for _ in 0..DUAL_ITERATIONS {
            let m1 = lo + (hi - lo) / 3.0;
            let m2 = hi - (hi - lo) / 3.0;
            let (d1, d2) = (dual(m1), dual(m2));
            if d1 <= d2 {
                hi = m2;
            } else {
                lo = m1;
            }
        }
        (lo + hi) / 2.0
    }

    /// Search order: reduced value descending, then price, then position.
    pub fn order(free: &[Candidate], lambda: f64) -> Vec<usize> {
        let mut order: Vec<usize> = (0..free.len()).collect();
        order.sort_by(|&a, &b| {
            let (ca, cb) = (&free[a], &free[b]);
            reduced(cb, lambda)
                .total_cmp(&reduced(ca, lambda))
                .then(ca.price.cmp(&cb.price))
                .then(a.cmp(&b))
        });
        order
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Cheapest way to fill `remaining` slots from candidates `depth..`.
    #[inline]
    pub fn min_cost(&self, depth: usize, remaining: usize) -> u64 {
        self.min_cost[depth * (self.slots + 1) + remaining]
    }

    /// Upper bound on the points `remaining` members from `depth..` can add
    /// within `budget`.
    pub fn optimistic_bound(&self, depth: usize, remaining: usize, budget: u64) -> f64 {
        let by_points = self.max_points[depth * (self.slots + 1) + remaining] as f64;
        let by_dual = self.lambda * budget as f64
            + (self.reduced_prefix[depth + remaining] - self.reduced_prefix[depth]);
        by_points.min(by_dual)
    }

    /// True if no completion under `bound` can strictly beat `best`.
    #[inline]
    pub fn can_prune(points: i64, bound: f64, best: i64) -> bool {
        ((points as f64 + bound + BOUND_EPSILON).floor() as i64) <= best
    }
}

#[inline]
fn reduced(c: &Candidate, lambda: f64) -> f64 {
    c.points as f64 - lambda * c.price as f64
}
