//! Win / partial-win tail probabilities with an explicit memoization cache.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::{SumGrid, ZeroPrefix};

/// Aggregated tail probabilities for one `(max_rolls, target)` query.
///
/// Loss probability is deliberately absent: the caller derives it as
/// `1 - win - partial_win`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailOutcome {
    pub win_probability: f64,
    pub partial_win_probability: f64,
}

/// Memoization cache for [`compute_tail`], keyed by `(max_rolls,
/// target_number)`.
///
/// The key deliberately omits `dice_sides`: a cache instance is only valid
/// for a single die configuration, and a caller that switches die sizes must
/// construct a fresh cache. Entries are never evicted; the key space of an
/// interactive session is tiny, but the growth is unbounded over the cache's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct TailCache {
    entries: HashMap<(u32, u32), TailOutcome>,
}

impl TailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Probability of landing exactly on the target, and exactly one away from
/// it, within `max_rolls` rolls of a `dice_sides`-sided die.
///
/// Results are memoized in `cache`; a repeated `(max_rolls, target_number)`
/// query returns the stored pair without rebuilding the grid.
#[must_use]
pub fn compute_tail(
    cache: &mut TailCache,
    dice_sides: u32,
    target_number: u32,
    max_rolls: u32,
) -> TailOutcome {
    let key = (max_rolls, target_number);
    if let Some(hit) = cache.entries.get(&key) {
        log::debug!("tail cache hit for rolls={max_rolls} target={target_number}");
        return *hit;
    }

    let grid = SumGrid::build(dice_sides, target_number, max_rolls, ZeroPrefix::Excluded);

    let mut win_probability = 0.0;
    let mut partial_win_probability = 0.0;
    for roll in 1..=max_rolls {
        win_probability += grid.prob(roll, target_number);
        if target_number > 1 {
            partial_win_probability += grid.prob(roll, target_number - 1);
        }
        if target_number < dice_sides {
            // One above the target sits past the truncated grid width, so
            // this read is always zero; kept as a guarded no-op for parity
            // with the adjacency rule.
            partial_win_probability += grid.prob(roll, target_number + 1);
        }
    }

    let outcome = TailOutcome {
        win_probability,
        partial_win_probability,
    };
    cache.entries.insert(key, outcome);
    log::debug!(
        "tail computed for rolls={max_rolls} target={target_number}: win={:.6} partial={:.6}",
        outcome.win_probability,
        outcome.partial_win_probability
    );
    outcome
}
