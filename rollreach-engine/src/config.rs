//! Calculator defaults and limits, loaded from the embedded JSON asset.

use serde::{Deserialize, Serialize};

use crate::params::RollParams;

const DEFAULT_CALCULATOR_DATA: &str = include_str!("../assets/data/calculator.json");

/// Die-size options, starting values, and the roll-budget ceiling exposed to
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "CalculatorConfig::default_dice_sides_options")]
    pub dice_sides_options: Vec<u32>,
    #[serde(default = "CalculatorConfig::default_dice_sides")]
    pub default_dice_sides: u32,
    #[serde(default = "CalculatorConfig::default_target_number")]
    pub default_target_number: u32,
    #[serde(default = "CalculatorConfig::default_max_rolls")]
    pub default_max_rolls: u32,
    #[serde(default = "CalculatorConfig::default_max_rolls_limit")]
    pub max_rolls_limit: u32,
}

impl CalculatorConfig {
    fn default_dice_sides_options() -> Vec<u32> {
        vec![4, 6, 8, 10, 12, 20]
    }

    const fn default_dice_sides() -> u32 {
        6
    }

    const fn default_target_number() -> u32 {
        25
    }

    const fn default_max_rolls() -> u32 {
        10
    }

    const fn default_max_rolls_limit() -> u32 {
        100
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_CALCULATOR_DATA).unwrap_or_default()
    }

    /// Query parameters populated from the configured starting values.
    #[must_use]
    pub const fn default_params(&self) -> RollParams {
        RollParams::new(
            self.default_dice_sides,
            self.default_target_number,
            self.default_max_rolls,
        )
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            dice_sides_options: Self::default_dice_sides_options(),
            default_dice_sides: Self::default_dice_sides(),
            default_target_number: Self::default_target_number(),
            default_max_rolls: Self::default_max_rolls(),
            max_rolls_limit: Self::default_max_rolls_limit(),
        }
    }
}
