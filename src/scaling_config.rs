//! # Scaling Configuration Module
//!
//! This module defines the configuration the scaling core owns: the bounds of
//! the servings multiplier and the default display language.

use anyhow::{bail, Context, Result};
use std::env;
use tracing::info;

// Constants for scaling configuration
pub const MIN_MULTIPLIER: u32 = 1;
pub const DEFAULT_MAX_MULTIPLIER: u32 = 5;
pub const DEFAULT_LANGUAGE: &str = "pl";

pub const MAX_MULTIPLIER_VAR: &str = "SERVINGS_MULTIPLIER_MAX";
pub const LANGUAGE_VAR: &str = "RECIPES_LANGUAGE";

/// Configuration structure for servings scaling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingConfig {
    /// Largest multiplier a user may select (inclusive)
    pub max_multiplier: u32,
    /// Language used for labels when the caller does not ask for one
    pub default_language: String,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ScalingConfig {
    /// Load configuration from the process environment (and `.env` if present)
    ///
    /// # Environment
    ///
    /// * `SERVINGS_MULTIPLIER_MAX` - upper multiplier bound, defaults to 5
    /// * `RECIPES_LANGUAGE` - default label language, defaults to `pl`
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            max_multiplier = config.max_multiplier,
            language = %config.default_language,
            "Loaded scaling configuration"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_MULTIPLIER_VAR) {
            let max_multiplier: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{MAX_MULTIPLIER_VAR} must be a positive integer, got '{raw}'"))?;
            if max_multiplier < MIN_MULTIPLIER {
                bail!("{MAX_MULTIPLIER_VAR} must be at least {MIN_MULTIPLIER}, got {max_multiplier}");
            }
            config.max_multiplier = max_multiplier;
        }

        if let Some(language) = lookup(LANGUAGE_VAR) {
            let language = language.trim();
            if !language.is_empty() {
                config.default_language = language.to_string();
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ScalingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ScalingConfig::default());
        assert_eq!(config.max_multiplier, 5);
        assert_eq!(config.default_language, "pl");
    }

    #[test]
    fn test_overrides() {
        let config = ScalingConfig::from_lookup(lookup_from(&[
            (MAX_MULTIPLIER_VAR, " 10 "),
            (LANGUAGE_VAR, "en"),
        ]))
        .unwrap();
        assert_eq!(config.max_multiplier, 10);
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn test_rejects_invalid_max() {
        assert!(ScalingConfig::from_lookup(lookup_from(&[(MAX_MULTIPLIER_VAR, "0")])).is_err());
        assert!(ScalingConfig::from_lookup(lookup_from(&[(MAX_MULTIPLIER_VAR, "-3")])).is_err());
        assert!(ScalingConfig::from_lookup(lookup_from(&[(MAX_MULTIPLIER_VAR, "lots")])).is_err());
    }

    #[test]
    fn test_blank_language_keeps_default() {
        let config = ScalingConfig::from_lookup(lookup_from(&[(LANGUAGE_VAR, "  ")])).unwrap();
        assert_eq!(config.default_language, "pl");
    }
}
