//! Points awarded per finishing position.
//!
//! Reference data for display layers; the scoring model does not read it.

/// Points for finishing positions 1 through 20.
pub const FINISHING_POINTS: [u32; 20] = [
    50, 44, 40, 36, 34, 32, 30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10, 8, 4, 2,
];

/// Returns the points for a 1-based finishing position, 0 outside the top 20.
pub fn points_for_position(position: usize) -> u32 {
    position
        .checked_sub(1)
        .and_then(|i| FINISHING_POINTS.get(i))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_and_tail() {
        assert_eq!(points_for_position(1), 50);
        assert_eq!(points_for_position(3), 40);
        assert_eq!(points_for_position(20), 2);
    }

    #[test]
    fn test_outside_scoring_positions() {
        assert_eq!(points_for_position(0), 0);
        assert_eq!(points_for_position(21), 0);
    }

    #[test]
    fn test_strictly_decreasing() {
        assert!(FINISHING_POINTS.windows(2).all(|w| w[0] > w[1]));
    }
}
