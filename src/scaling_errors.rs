//! # Scaling Error Types Module
//!
//! This module defines the error kinds surfaced by the scaling core.
//! Every failure is a caller bug or a data integrity problem; none of them
//! are transient, so nothing here is ever retried.

use thiserror::Error;

/// Errors raised while scaling amounts and selecting grammar forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalingError {
    /// Input rejected at the boundary (non-positive amount, multiplier out of range, ...)
    #[error("Validation error: {0}")]
    Validation(String),
    /// Data references a measure, category or grammar table the crate does not cover
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ScalingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ScalingError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ScalingError::Configuration(msg.into())
    }

    /// True for input errors the calling layer should have rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, ScalingError::Validation(_))
    }

    /// True for data/config integrity errors
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScalingError::Configuration(_))
    }
}
