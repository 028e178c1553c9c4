//! Query parameters and their validation rules.
//!
//! The compute functions themselves never validate: degenerate inputs fall
//! through empty loop ranges and come back as zero-filled results. Callers
//! that want a hard failure instead run [`RollParams::validate`] (or
//! [`RollParams::validate_against`] to also apply configured limits) before
//! computing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CalculatorConfig;

/// The three scalars that fully determine a probability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollParams {
    pub dice_sides: u32,
    pub target_number: u32,
    pub max_rolls: u32,
}

impl RollParams {
    #[must_use]
    pub const fn new(dice_sides: u32, target_number: u32, max_rolls: u32) -> Self {
        Self {
            dice_sides,
            target_number,
            max_rolls,
        }
    }

    /// Largest sum reachable within the roll budget.
    #[must_use]
    pub fn max_reachable(&self) -> u64 {
        u64::from(self.dice_sides) * u64::from(self.max_rolls)
    }

    /// Check the structural invariants: positive die and roll budget, and
    /// `dice_sides <= target_number <= dice_sides * max_rolls`.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` naming the first violated bound.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.dice_sides == 0 {
            return Err(ParamError::ZeroDiceSides);
        }
        if self.max_rolls == 0 {
            return Err(ParamError::ZeroMaxRolls);
        }
        if self.target_number < self.dice_sides {
            return Err(ParamError::TargetBelowDieRange {
                target: self.target_number,
                dice_sides: self.dice_sides,
            });
        }
        if u64::from(self.target_number) > self.max_reachable() {
            return Err(ParamError::TargetUnreachable {
                target: self.target_number,
                dice_sides: self.dice_sides,
                max_rolls: self.max_rolls,
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus the configured die-size options and
    /// roll-budget limit.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` when a structural bound or a configured limit is
    /// violated.
    pub fn validate_against(&self, config: &CalculatorConfig) -> Result<(), ParamError> {
        self.validate()?;
        if !config.dice_sides_options.contains(&self.dice_sides) {
            return Err(ParamError::UnsupportedDieSize {
                dice_sides: self.dice_sides,
            });
        }
        if self.max_rolls > config.max_rolls_limit {
            return Err(ParamError::RollBudgetExceeded {
                value: self.max_rolls,
                limit: config.max_rolls_limit,
            });
        }
        Ok(())
    }
}

/// Errors raised when query parameters violate the documented bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("dice must have at least one side")]
    ZeroDiceSides,
    #[error("at least one roll is required")]
    ZeroMaxRolls,
    #[error("target {target} is below the die range (minimum {dice_sides})")]
    TargetBelowDieRange { target: u32, dice_sides: u32 },
    #[error(
        "target {target} is unreachable with {max_rolls} rolls of a {dice_sides}-sided die"
    )]
    TargetUnreachable {
        target: u32,
        dice_sides: u32,
        max_rolls: u32,
    },
    #[error("die size {dice_sides} is not among the supported options")]
    UnsupportedDieSize { dice_sides: u32 },
    #[error("{value} rolls exceeds the configured limit of {limit}")]
    RollBudgetExceeded { value: u32, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_params_pass() {
        assert_eq!(RollParams::new(6, 25, 10).validate(), Ok(()));
    }

    #[test]
    fn bounds_are_enforced_in_order() {
        assert_eq!(
            RollParams::new(0, 25, 10).validate(),
            Err(ParamError::ZeroDiceSides)
        );
        assert_eq!(
            RollParams::new(6, 25, 0).validate(),
            Err(ParamError::ZeroMaxRolls)
        );
        assert_eq!(
            RollParams::new(6, 4, 10).validate(),
            Err(ParamError::TargetBelowDieRange {
                target: 4,
                dice_sides: 6
            })
        );
        assert_eq!(
            RollParams::new(6, 61, 10).validate(),
            Err(ParamError::TargetUnreachable {
                target: 61,
                dice_sides: 6,
                max_rolls: 10
            })
        );
    }

    #[test]
    fn reachability_boundary_is_inclusive() {
        assert_eq!(RollParams::new(6, 60, 10).validate(), Ok(()));
        assert_eq!(RollParams::new(6, 6, 10).validate(), Ok(()));
    }

    #[test]
    fn config_limits_apply_on_top() {
        let config = CalculatorConfig::default();
        assert_eq!(RollParams::new(6, 25, 10).validate_against(&config), Ok(()));
        assert_eq!(
            RollParams::new(7, 25, 10).validate_against(&config),
            Err(ParamError::UnsupportedDieSize { dice_sides: 7 })
        );
        assert_eq!(
            RollParams::new(6, 200, 101).validate_against(&config),
            Err(ParamError::RollBudgetExceeded {
                value: 101,
                limit: 100
            })
        );
    }
}
