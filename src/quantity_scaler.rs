//! # Quantity Scaler Module
//!
//! Multiplies a base ingredient amount by the servings multiplier and splits
//! the result into a whole part and a display fraction snapped to one of the
//! accepted fractions (1/4, 1/3, 1/2, 2/3, 3/4).
//!
//! ## Example
//!
//! ```rust
//! use recipes::measurement_types::MeasureKind;
//! use recipes::quantity_scaler::scale_amount;
//! use recipes::scaling_config::ScalingConfig;
//! use recipes::servings::ServingsMultiplier;
//!
//! let multiplier = ServingsMultiplier::new(3, &ScalingConfig::default())?;
//! let display = scale_amount(0.5, multiplier, MeasureKind::Glass)?;
//! assert_eq!(display.whole_part.as_deref(), Some("1"));
//! assert_eq!(display.fraction_glyph.as_deref(), Some("1/2"));
//! # Ok::<(), recipes::scaling_errors::ScalingError>(())
//! ```

use serde::Serialize;
use tracing::{trace, warn};

use crate::grammar_tables::{fraction_glyph, ACCEPTED_FRACTIONS};
use crate::measurement_types::MeasureKind;
use crate::scaling_errors::ScalingError;
use crate::servings::ServingsMultiplier;

/// How a scaled amount should be displayed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayAmount {
    /// False for measures rendered as a phrase only (pinch, to taste)
    pub needs_display: bool,
    /// True when the scaled amount is at least one
    pub has_whole_part: bool,
    pub whole_part: Option<String>,
    /// Snapped fraction glyph, `None` when it snapped to zero
    pub fraction_glyph: Option<String>,
}

impl DisplayAmount {
    /// Text of the amount, e.g. "2 1/2", "3/4" or "6"
    pub fn text(&self) -> Option<String> {
        if !self.needs_display {
            return None;
        }
        match (&self.whole_part, &self.fraction_glyph) {
            (Some(whole), Some(glyph)) => Some(format!("{whole} {glyph}")),
            (Some(whole), None) => Some(whole.clone()),
            (None, Some(glyph)) => Some(glyph.clone()),
            (None, None) => None,
        }
    }
}

/// Multiply a base amount by the multiplier
///
/// Rejects amounts that are not finite and strictly positive.
pub fn scaled_quantity(base_amount: f64, multiplier: ServingsMultiplier) -> Result<f64, ScalingError> {
    if !base_amount.is_finite() || base_amount <= 0.0 {
        warn!(base_amount, "Rejected non-positive ingredient amount");
        return Err(ScalingError::validation(format!(
            "ingredient amount must be positive, got {base_amount}"
        )));
    }
    Ok(base_amount * f64::from(multiplier.get()))
}

/// Snap a fractional part to the closest accepted fraction
///
/// On an exact tie the lower fraction wins.
pub fn snap_fraction(fractional: f64) -> f64 {
    ACCEPTED_FRACTIONS
        .iter()
        .copied()
        .min_by(|a, b| (a - fractional).abs().total_cmp(&(b - fractional).abs()))
        .unwrap_or(0.0)
}

/// Split an already scaled amount into its display parts
pub fn decompose(scaled: f64) -> DisplayAmount {
    let fractional = scaled % 1.0;
    let snapped = snap_fraction(fractional);
    trace!(scaled, fractional, snapped, "Snapped fractional part");

    let whole_part = if scaled >= 1.0 {
        Some(format!("{}", scaled.trunc() as u64))
    } else {
        None
    };

    DisplayAmount {
        needs_display: true,
        has_whole_part: whole_part.is_some(),
        whole_part,
        fraction_glyph: fraction_glyph(snapped).map(str::to_string),
    }
}

/// Scale a base amount and build its display record
///
/// Pinch and to-taste amounts are never shown as numbers; their record has
/// `needs_display == false` and no parts.
pub fn scale_amount(
    base_amount: f64,
    multiplier: ServingsMultiplier,
    measure: MeasureKind,
) -> Result<DisplayAmount, ScalingError> {
    let scaled = scaled_quantity(base_amount, multiplier)?;

    if !measure.shows_amount() {
        return Ok(DisplayAmount::default());
    }

    Ok(decompose(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaling_config::ScalingConfig;

    fn times(value: u32) -> ServingsMultiplier {
        let config = ScalingConfig {
            max_multiplier: 10,
            ..Default::default()
        };
        ServingsMultiplier::new(value, &config).unwrap()
    }

    #[test]
    fn test_snap_fraction_nearest() {
        assert_eq!(snap_fraction(0.6), 0.67);
        assert_eq!(snap_fraction(0.4), 0.33);
        assert_eq!(snap_fraction(0.3), 0.33);
        assert_eq!(snap_fraction(0.9), 0.75);
        assert_eq!(snap_fraction(0.05), 0.0);
    }

    #[test]
    fn test_snap_fraction_tie_prefers_lower() {
        // 0.125 is exactly between 0 and 0.25
        assert_eq!(snap_fraction(0.125), 0.0);
        // 0.375 is exactly between 0.25 and 0.5 but 0.33 is closer
        assert_eq!(snap_fraction(0.375), 0.33);
    }

    #[test]
    fn test_whole_amount() {
        let display = scale_amount(2.0, times(3), MeasureKind::Teaspoon).unwrap();
        assert!(display.needs_display);
        assert!(display.has_whole_part);
        assert_eq!(display.whole_part.as_deref(), Some("6"));
        assert_eq!(display.fraction_glyph, None);
        assert_eq!(display.text().as_deref(), Some("6"));
    }

    #[test]
    fn test_below_one_has_no_whole_part() {
        let display = scale_amount(0.25, times(1), MeasureKind::Glass).unwrap();
        assert!(!display.has_whole_part);
        assert_eq!(display.whole_part, None);
        assert_eq!(display.fraction_glyph.as_deref(), Some("1/4"));
        assert_eq!(display.text().as_deref(), Some("1/4"));
    }

    #[test]
    fn test_mixed_amount() {
        let display = scale_amount(1.3, times(2), MeasureKind::Gram).unwrap();
        assert_eq!(display.whole_part.as_deref(), Some("2"));
        assert_eq!(display.fraction_glyph.as_deref(), Some("2/3"));
        assert_eq!(display.text().as_deref(), Some("2 2/3"));
    }

    #[test]
    fn test_phrase_measures_are_not_displayed() {
        for measure in [MeasureKind::Pinch, MeasureKind::ToTaste] {
            let display = scale_amount(1.5, times(4), measure).unwrap();
            assert_eq!(display, DisplayAmount::default());
            assert_eq!(display.text(), None);
        }
    }

    #[test]
    fn test_rejects_bad_amounts() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = scale_amount(amount, times(1), MeasureKind::Gram).unwrap_err();
            assert!(err.is_validation(), "{amount}");
        }
    }
}
