//! Seeded random markets.

use peloton_core::{Competitor, EventCatalog, Quality, QualityRatings};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Price granularity of a generated market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketShape {
    /// Prices are multiples of 250,000, like the real game.
    Granular,
    /// Prices are arbitrary whole units.
    Arbitrary,
}

/// Generates `n` valid competitors entered in random catalog events.
///
/// Roughly one in eight competitors is entered in nothing. The same seed
/// always produces the same market.
pub fn random_market(seed: u64, n: usize, catalog: &EventCatalog, shape: MarketShape) -> Vec<Competitor> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n)
        .map(|i| {
            let price = match shape {
                MarketShape::Granular => rng.random_range(2..=28u64) * 250_000,
                MarketShape::Arbitrary => rng.random_range(500_000..=7_000_000u64),
            };

            let mut qualities = QualityRatings::default();
            for q in Quality::ALL {
                qualities.set(q, rng.random_range(0..=10u8));
            }

            let mut competitor = Competitor::new(i as u64 + 1, format!("Random {}", i + 1), price)
                .with_qualities(qualities)
                .with_category(if i % 2 == 0 { "Sprinter" } else { "Cobbles" });

            if !rng.random_bool(0.125) {
                for event in catalog {
                    if rng.random_bool(0.5) {
                        competitor.races.insert(event.code.clone());
                    }
                }
            }
            competitor
        })
        .collect()
}
