//! Per-sum reach probabilities across the whole roll budget.

use crate::grid::{SumGrid, ZeroPrefix};

/// Probability of landing exactly on each total `0..=target_number` at some
/// point within `max_rolls` rolls, as a sequence indexed by total.
///
/// Historically named a CDF, and the name is kept for compatibility, but the
/// values are per-sum exact-probability aggregates across roll counts, not a
/// running `sum <= i` distribution. Index 0 is always zero: no non-empty
/// roll sequence of positive faces sums to zero.
///
/// Not memoized; plotting recomputes it per target and the grid is cheap.
#[must_use]
pub fn compute_cdf(dice_sides: u32, target_number: u32, max_rolls: u32) -> Vec<f64> {
    let grid = SumGrid::build(dice_sides, target_number, max_rolls, ZeroPrefix::Included);
    (0..=target_number)
        .map(|total| (1..=max_rolls).map(|roll| grid.prob(roll, total)).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tracks_target() {
        assert_eq!(compute_cdf(6, 25, 10).len(), 26);
        assert_eq!(compute_cdf(6, 0, 10).len(), 1);
    }

    #[test]
    fn index_zero_is_always_empty() {
        for target in [0, 1, 6, 25] {
            let cdf = compute_cdf(6, target, 10);
            assert!(cdf[0].abs() < f64::EPSILON);
        }
    }

    #[test]
    fn single_roll_values_match_die() {
        let cdf = compute_cdf(6, 6, 1);
        for total in 1..=6 {
            assert!((cdf[total] - 1.0 / 6.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn reachable_totals_accumulate_mass() {
        let cdf = compute_cdf(6, 12, 4);
        // Every total in 1..=12 is reachable within four d6 rolls.
        for (total, p) in cdf.iter().enumerate().skip(1) {
            assert!(*p > 0.0, "total {total} unexpectedly has zero mass");
        }
    }

    #[test]
    fn tail_element_matches_tail_engine_win() {
        use crate::tail::{TailCache, compute_tail};
        let cdf = compute_cdf(6, 15, 6);
        let tail = compute_tail(&mut TailCache::new(), 6, 15, 6);
        assert!((cdf[15] - tail.win_probability).abs() < 1e-12);
    }
}
