//! Servings multiplier held by the calling session, and the "more"/"less"
//! adjustments a user can request on a recipe page.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::scaling_config::{ScalingConfig, MIN_MULTIPLIER};
use crate::scaling_errors::ScalingError;

/// How many times the base recipe is scaled
///
/// Always within `[1, max]`; the bound travels with the value so adjustments
/// can saturate without looking the configuration up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServingsMultiplier {
    value: u32,
    max: u32,
}

impl ServingsMultiplier {
    /// Validate a multiplier against the configured bounds
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn new(value: u32, config: &ScalingConfig) -> Result<Self, ScalingError> {
        let max = config.max_multiplier.max(MIN_MULTIPLIER);
        if !(MIN_MULTIPLIER..=max).contains(&value) {
            warn!(value, max, "Rejected servings multiplier");
            return Err(ScalingError::validation(format!(
                "servings multiplier {value} is outside {MIN_MULTIPLIER}..={max}"
            )));
        }
        Ok(Self { value, max })
    }

    /// Multiplier used when a recipe page is first opened
    pub fn initial(config: &ScalingConfig) -> Self {
        Self {
            value: MIN_MULTIPLIER,
            max: config.max_multiplier.max(MIN_MULTIPLIER),
        }
    }

    pub fn get(self) -> u32 {
        self.value
    }

    pub fn max(self) -> u32 {
        self.max
    }

    pub fn can_increase(self) -> bool {
        self.value < self.max
    }

    pub fn can_decrease(self) -> bool {
        self.value > MIN_MULTIPLIER
    }

    /// Apply a user adjustment, staying put at either bound
    pub fn adjust(self, adjustment: ServingsAdjustment) -> Self {
        let value = match adjustment {
            ServingsAdjustment::More if self.can_increase() => self.value + 1,
            ServingsAdjustment::Less if self.can_decrease() => self.value - 1,
            _ => self.value,
        };
        Self { value, ..self }
    }
}

impl fmt::Display for ServingsMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.value)
    }
}

/// A request to scale the recipe up or down by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsAdjustment {
    More,
    Less,
}

impl FromStr for ServingsAdjustment {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "more" => Ok(ServingsAdjustment::More),
            "less" => Ok(ServingsAdjustment::Less),
            other => Err(ScalingError::validation(format!(
                "unknown servings adjustment '{other}'"
            ))),
        }
    }
}
