//! Portion-count formatting ("przepis na 6 porcji").

use serde::Serialize;
use std::fmt;

use crate::grammar_tables::PORTION_GRAMMAR_PL;
use crate::measurement_types::classify;
use crate::servings::ServingsMultiplier;

/// Scaled serving count with the matching form of "porcja"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortionDisplay {
    pub count: u32,
    pub noun: &'static str,
}

/// Scale the base serving count and decline the portion noun for it
pub fn format_portions(base_servings: u32, multiplier: ServingsMultiplier) -> PortionDisplay {
    let count = base_servings.saturating_mul(multiplier.get());
    PortionDisplay {
        count,
        noun: PORTION_GRAMMAR_PL.form(classify(f64::from(count))),
    }
}

impl fmt::Display for PortionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.noun)
    }
}
