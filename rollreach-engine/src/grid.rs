//! Truncated sum-distribution grid built by forward dynamic programming.
//!
//! `P[roll][total]` is the probability that the cumulative sum after exactly
//! `roll` dice equals `total`. Sums above the target are never stored: mass
//! that overshoots the target cannot come back down, so it is irrelevant to
//! every query the engine answers. A consequence worth keeping in mind is
//! that a single row does not sum to 1 once overshooting becomes possible.

use serde::{Deserialize, Serialize};

/// Boundary rule for the accumulation step.
///
/// The two engine variants disagree on whether a cell may accumulate from a
/// prior total of exactly zero. With positive-valued faces a length-`r-1`
/// prefix summing to zero is impossible for `r > 1`, so the variants are
/// numerically identical; both are kept as explicit, named rules so the
/// asymmetry stays visible rather than buried in two divergent loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroPrefix {
    /// Skip the `total - face == 0` term; face loop runs over the full die.
    Excluded,
    /// Allow the `total - face == 0` term; face loop capped at `total`
    /// (faces above `total` contribute nothing either way).
    Included,
}

/// Dense probability table over roll counts `0..=max_rolls` and totals
/// `0..=target_number`. Row 0 is allocated but never populated.
#[derive(Debug, Clone, PartialEq)]
pub struct SumGrid {
    target_number: u32,
    max_rolls: u32,
    cells: Vec<Vec<f64>>,
}

impl SumGrid {
    /// Build the truncated grid for a uniform die with faces `1..=dice_sides`.
    ///
    /// Degenerate inputs (zero sides, zero rolls, target zero) produce a
    /// zero-filled grid through empty loop ranges; the builder performs no
    /// validation of its own.
    #[must_use]
    pub fn build(dice_sides: u32, target_number: u32, max_rolls: u32, rule: ZeroPrefix) -> Self {
        let width = target_number as usize + 1;
        let mut cells = vec![vec![0.0_f64; width]; max_rolls as usize + 1];

        // Roll 1 comes straight from the die distribution; faces beyond the
        // target fall outside the truncated width and are dropped.
        if max_rolls >= 1 {
            for face in 1..=dice_sides {
                if face <= target_number {
                    cells[1][face as usize] = 1.0 / f64::from(dice_sides);
                }
            }
        }

        for roll in 2..=max_rolls as usize {
            let (settled, rest) = cells.split_at_mut(roll);
            let prev = &settled[roll - 1];
            let row = &mut rest[0];
            for total in 1..=target_number as usize {
                let face_cap = match rule {
                    ZeroPrefix::Excluded => dice_sides as usize,
                    ZeroPrefix::Included => (dice_sides as usize).min(total),
                };
                for face in 1..=face_cap {
                    let include = match rule {
                        ZeroPrefix::Excluded => total > face,
                        ZeroPrefix::Included => total >= face,
                    };
                    if include {
                        row[total] += prev[total - face] / f64::from(dice_sides);
                    }
                }
            }
        }

        Self {
            target_number,
            max_rolls,
            cells,
        }
    }

    /// Probability mass at `(roll, total)`, with out-of-range coordinates
    /// reading as zero. The tail engine leans on this for the one-above
    /// neighbor of the target, which always sits past the truncated width.
    #[must_use]
    pub fn prob(&self, roll: u32, total: u32) -> f64 {
        self.cells
            .get(roll as usize)
            .and_then(|row| row.get(total as usize))
            .copied()
            .unwrap_or(0.0)
    }

    #[must_use]
    pub const fn target_number(&self) -> u32 {
        self.target_number
    }

    #[must_use]
    pub const fn max_rolls(&self) -> u32 {
        self.max_rolls
    }
}
