//! Rollreach Probability Engine
//!
//! Platform-agnostic core for the Rollreach dice-sum target calculator.
//! Given a uniform die, a target sum, and a roll budget, it computes the
//! probability of reaching the target exactly (win), landing one away from
//! it (partial win), and the per-sum reach distribution used for plotting.
//!
//! Everything is synchronous, single-threaded forward dynamic programming
//! over a sum grid truncated at the target; see [`grid::SumGrid`]. The only
//! mutable state is the explicit [`tail::TailCache`] the caller owns.

pub mod cdf;
pub mod config;
pub mod grid;
pub mod params;
pub mod tail;

// Re-export commonly used types
pub use cdf::compute_cdf;
pub use config::CalculatorConfig;
pub use grid::{SumGrid, ZeroPrefix};
pub use params::{ParamError, RollParams};
pub use tail::{TailCache, TailOutcome, compute_tail};
