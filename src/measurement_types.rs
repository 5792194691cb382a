//! # Measurement Types Module
//!
//! This module defines the measure kinds an ingredient amount can be expressed
//! in, and the grammatical quantity classes that drive Polish noun declension.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scaling_errors::ScalingError;

/// Unit in which an ingredient amount is expressed
///
/// Persisted records store these as integer codes 1 through 7, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureKind {
    Teaspoon,
    Tablespoon,
    Glass,
    Pinch,
    Gram,
    ToTaste,
    /// Counted items; the ingredient name stands in for the unit ("3 jajka")
    Unit,
}

impl MeasureKind {
    /// All measure kinds in code order
    pub const ALL: [MeasureKind; 7] = [
        MeasureKind::Teaspoon,
        MeasureKind::Tablespoon,
        MeasureKind::Glass,
        MeasureKind::Pinch,
        MeasureKind::Gram,
        MeasureKind::ToTaste,
        MeasureKind::Unit,
    ];

    /// Integer code used by the persistence layer
    pub fn code(self) -> u8 {
        match self {
            MeasureKind::Teaspoon => 1,
            MeasureKind::Tablespoon => 2,
            MeasureKind::Glass => 3,
            MeasureKind::Pinch => 4,
            MeasureKind::Gram => 5,
            MeasureKind::ToTaste => 6,
            MeasureKind::Unit => 7,
        }
    }

    /// Whether the amount is rendered as a number at all
    ///
    /// Pinch and to-taste lines are always shown as a fixed phrase instead.
    pub fn shows_amount(self) -> bool {
        !matches!(self, MeasureKind::Pinch | MeasureKind::ToTaste)
    }
}

impl TryFrom<u8> for MeasureKind {
    type Error = ScalingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        MeasureKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| ScalingError::configuration(format!("unknown measure code {code}")))
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureKind::Teaspoon => "teaspoon",
            MeasureKind::Tablespoon => "tablespoon",
            MeasureKind::Glass => "glass",
            MeasureKind::Pinch => "pinch",
            MeasureKind::Gram => "gram",
            MeasureKind::ToTaste => "to taste",
            MeasureKind::Unit => "unit",
        };
        write!(f, "{name}")
    }
}

/// Grammatical number bucket of a scaled quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityClass {
    /// Exactly one
    Singular,
    /// Whole 2, 3 or 4
    Few,
    /// Whole five or more
    Many,
    /// Everything else, including values below one and non-integers
    Fractional,
}

/// Classify a quantity for noun declension
///
/// The checks run in a fixed order and the first match wins:
/// exactly 1, then whole 2..=4, then whole >= 5, then everything else.
pub fn classify(quantity: f64) -> QuantityClass {
    let is_whole = quantity.fract() == 0.0;

    if quantity == 1.0 {
        QuantityClass::Singular
    } else if is_whole && (2.0..=4.0).contains(&quantity) {
        QuantityClass::Few
    } else if quantity >= 5.0 && is_whole {
        QuantityClass::Many
    } else {
        QuantityClass::Fractional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_codes_round_trip() {
        for kind in MeasureKind::ALL {
            assert_eq!(MeasureKind::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_measure_code() {
        let err = MeasureKind::try_from(8).unwrap_err();
        assert!(err.is_configuration());
        assert!(MeasureKind::try_from(0).unwrap_err().is_configuration());
    }

    #[test]
    fn test_shows_amount() {
        assert!(!MeasureKind::Pinch.shows_amount());
        assert!(!MeasureKind::ToTaste.shows_amount());
        assert!(MeasureKind::Gram.shows_amount());
        assert!(MeasureKind::Unit.shows_amount());
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.99), QuantityClass::Fractional);
        assert_eq!(classify(1.0), QuantityClass::Singular);
        assert_eq!(classify(1.01), QuantityClass::Fractional);
        assert_eq!(classify(4.0), QuantityClass::Few);
        assert_eq!(classify(4.99), QuantityClass::Fractional);
        assert_eq!(classify(5.0), QuantityClass::Many);
    }

    #[test]
    fn test_classify_remaining_cases() {
        assert_eq!(classify(2.0), QuantityClass::Few);
        assert_eq!(classify(3.0), QuantityClass::Few);
        assert_eq!(classify(2.5), QuantityClass::Fractional);
        assert_eq!(classify(12.0), QuantityClass::Many);
        assert_eq!(classify(7.5), QuantityClass::Fractional);
        assert_eq!(classify(0.5), QuantityClass::Fractional);
        assert_eq!(classify(0.0), QuantityClass::Fractional);
    }

    #[test]
    fn test_measure_deserializes_from_snake_case() {
        let kind: MeasureKind = serde_json::from_str("\"to_taste\"").unwrap();
        assert_eq!(kind, MeasureKind::ToTaste);
        assert_eq!(kind.to_string(), "to taste");
    }
}
