//! Race score and the expected-points step function.
//!
//! A competitor's race score combines the event's primary and secondary
//! quality ratings and scales them by the event weight. The score then maps
//! onto one of five fixed tiers, each the product of an assumed average
//! haul when scoring and the chance of scoring at all.

use peloton_core::{Competitor, Event, Points};

/// Share of the primary dimension in the race score.
pub const PRIMARY_SHARE: f64 = 0.7;

/// Share of the secondary dimension in the race score.
pub const SECONDARY_SHARE: f64 = 0.3;

/// One step of the race-score to expected-points mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionTier {
    /// Inclusive lower race-score bound of the tier.
    pub min_race_score: f64,
    /// Average points assumed when the competitor scores.
    pub avg_points: u32,
    /// Probability of scoring at all.
    pub probability: f64,
    /// `avg_points * probability`, exact.
    pub expected: Points,
}

/// The tiers, highest first. Any positive race score below the last bound
/// still falls in the last tier.
pub const PROJECTION_TIERS: [ProjectionTier; 5] = [
    ProjectionTier {
        min_race_score: 7.0,
        avg_points: 40,
        probability: 0.70,
        expected: Points::from_hundredths(2800),
    },
    ProjectionTier {
        min_race_score: 5.0,
        avg_points: 30,
        probability: 0.50,
        expected: Points::from_hundredths(1500),
    },
    ProjectionTier {
        min_race_score: 3.0,
        avg_points: 20,
        probability: 0.35,
        expected: Points::from_hundredths(700),
    },
    ProjectionTier {
        min_race_score: 1.5,
        avg_points: 10,
        probability: 0.20,
        expected: Points::from_hundredths(200),
    },
    ProjectionTier {
        min_race_score: 0.0,
        avg_points: 5,
        probability: 0.10,
        expected: Points::from_hundredths(50),
    },
];

/// Highest expected points any single event can yield.
pub const MAX_EVENT_POINTS: Points = PROJECTION_TIERS[0].expected;

/// Weighted quality of a competitor for an event, 0 when not entered.
///
/// Evaluated as `(primary * 0.7 + secondary * 0.3) * weight` in that order
/// so tier boundaries fall exactly where the published projections put them.
pub fn race_score(competitor: &Competitor, event: &Event) -> f64 {
    if !competitor.participates(event.code.as_str()) {
        return 0.0;
    }

    let primary = f64::from(competitor.qualities.get(event.primary));
    let secondary = event
        .secondary
        .map(|q| f64::from(competitor.qualities.get(q)))
        .unwrap_or(0.0);

    let quality = primary * PRIMARY_SHARE + secondary * SECONDARY_SHARE;
    quality * event.weight
}

/// Returns the tier a positive race score falls in.
pub fn tier_for(race_score: f64) -> Option<&'static ProjectionTier> {
    if race_score <= 0.0 || race_score.is_nan() {
        return None;
    }
    PROJECTION_TIERS
        .iter()
        .find(|tier| race_score >= tier.min_race_score)
}

/// Maps a race score onto expected points.
pub fn expected_points(race_score: f64) -> Points {
    tier_for(race_score)
        .map(|tier| tier.expected)
        .unwrap_or(Points::ZERO)
}

/// Expected points of a competitor in one event.
#[inline]
pub fn project_event(competitor: &Competitor, event: &Event) -> Points {
    expected_points(race_score(competitor, event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use peloton_core::Quality;

    fn entered(quality: Quality, rating: u8) -> Competitor {
        Competitor::new(1, "Rider", 1_000_000)
            .with_quality(quality, rating)
            .entered_in("race")
    }

    #[test]
    fn test_tier_expected_values_match_products() {
        for tier in PROJECTION_TIERS {
            let product = (f64::from(tier.avg_points) * tier.probability * 100.0).round() as i64;
            assert_eq!(tier.expected.hundredths(), product);
        }
    }

    #[test]
    fn test_step_function_boundaries() {
        assert_eq!(expected_points(0.0), Points::ZERO);
        assert_eq!(expected_points(-1.0), Points::ZERO);
        assert_eq!(expected_points(0.01), Points::from_hundredths(50));
        assert_eq!(expected_points(1.49), Points::from_hundredths(50));
        assert_eq!(expected_points(1.5), Points::whole(2));
        assert_eq!(expected_points(3.0), Points::whole(7));
        assert_eq!(expected_points(4.99), Points::whole(7));
        assert_eq!(expected_points(5.0), Points::whole(15));
        assert_eq!(expected_points(7.0), Points::whole(28));
        assert_eq!(expected_points(10.0), Points::whole(28));
    }

    #[test]
    fn test_not_entered_scores_zero() {
        let event = Event::new("race", "Race", Quality::Sprint, 1.0);
        let absent = Competitor::new(1, "Rider", 1).with_quality(Quality::Sprint, 10);
        assert_eq!(race_score(&absent, &event), 0.0);
        assert_eq!(project_event(&absent, &event), Points::ZERO);
    }

    #[test]
    fn test_entered_with_zero_ratings_scores_zero() {
        let event = Event::new("race", "Race", Quality::Sprint, 1.0);
        let rider = Competitor::new(1, "Rider", 1).entered_in("race");
        assert_eq!(project_event(&rider, &event), Points::ZERO);
    }

    #[test]
    fn test_secondary_contributes_thirty_percent() {
        let event = Event::new("race", "Race", Quality::Cobbles, 0.5).with_secondary(Quality::Hill);
        let rider = entered(Quality::Cobbles, 8).with_quality(Quality::Hill, 6);
        let expected = (8.0 * 0.7 + 6.0 * 0.3) * 0.5;
        assert_eq!(race_score(&rider, &event), expected);
        assert_eq!(project_event(&rider, &event), Points::whole(7));
    }

    #[test]
    fn test_float_boundary_follows_evaluation_order() {
        // 3 * 0.7 + 3 * 0.3 evaluates just below 3.0.
        let event = Event::new("race", "Race", Quality::Hill, 1.0).with_secondary(Quality::Punch);
        let rider = entered(Quality::Hill, 3).with_quality(Quality::Punch, 3);
        assert!(race_score(&rider, &event) < 3.0);
        assert_eq!(project_event(&rider, &event), Points::whole(2));
    }

    #[test]
    fn test_top_rating_reaches_top_tier() {
        let event = Event::new("race", "Race", Quality::Cobbles, 1.0);
        let rider = entered(Quality::Cobbles, 10);
        assert_eq!(race_score(&rider, &event), 7.0);
        assert_eq!(project_event(&rider, &event), MAX_EVENT_POINTS);
    }
}
