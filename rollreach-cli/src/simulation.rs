//! Seeded Monte Carlo cross-check of the DP engine.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use rollreach_engine::RollParams;

use crate::session::ProbabilitySnapshot;

/// Sample size / tolerance pairing used by the acceptance sweeps.
pub const DEFAULT_ITERATIONS: u32 = 5000;
pub const TOLERANCE: f64 = 0.025;

/// Outcome of one verification run: observed frequencies next to the DP
/// values they are expected to track.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub iterations: u32,
    pub seed: u64,
    pub tolerance: f64,
    pub observed: ProbabilitySnapshot,
    pub expected: ProbabilitySnapshot,
    pub max_deviation: f64,
    pub passed: bool,
}

/// Play `iterations` seeded games and compare win/partial/loss frequencies
/// against `expected` within [`TOLERANCE`].
#[must_use]
pub fn run_verification(
    params: RollParams,
    expected: ProbabilitySnapshot,
    iterations: u32,
    seed: u64,
) -> VerificationReport {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut target_hits = 0_u32;
    let mut below_hits = 0_u32;
    for _ in 0..iterations {
        let (hit_target, hit_below) = play_once(&mut rng, params);
        if hit_target {
            target_hits += 1;
        }
        if hit_below {
            below_hits += 1;
        }
    }

    let total = f64::from(iterations.max(1));
    let win = f64::from(target_hits) / total;
    let partial_win = f64::from(below_hits) / total;
    let observed = ProbabilitySnapshot {
        win,
        partial_win,
        loss: (1.0 - win - partial_win).max(0.0),
    };

    let max_deviation = (observed.win - expected.win)
        .abs()
        .max((observed.partial_win - expected.partial_win).abs())
        .max((observed.loss - expected.loss).abs());

    VerificationReport {
        iterations,
        seed,
        tolerance: TOLERANCE,
        observed,
        expected,
        max_deviation,
        passed: max_deviation <= TOLERANCE,
    }
}

/// One game: roll until the budget runs out or the sum reaches the target.
///
/// Returns whether the running sum ever landed exactly on the target, and
/// whether it ever landed one below it. One above is not tracked: the
/// engine's truncated grid carries no mass past the target, so the only
/// adjacent sum it credits is the one below.
fn play_once(rng: &mut SmallRng, params: RollParams) -> (bool, bool) {
    if params.dice_sides == 0 {
        return (false, false);
    }
    let target = u64::from(params.target_number);
    let mut sum = 0_u64;
    let mut hit_target = false;
    let mut hit_below = false;
    for _ in 0..params.max_rolls {
        sum += u64::from(rng.gen_range(1..=params.dice_sides));
        if sum == target {
            hit_target = true;
        }
        if sum + 1 == target {
            hit_below = true;
        }
        if sum >= target {
            // The sum only grows; nothing relevant can be hit past here.
            break;
        }
    }
    (hit_target, hit_below)
}
