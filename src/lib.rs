//! # Recipes
//!
//! Servings rescaling for a recipe site: scales ingredient amounts by a
//! session-held multiplier, snaps them to readable fractions and picks the
//! correctly declined Polish nouns for units, ingredients and portions.

pub mod grammar_selector;
pub mod grammar_tables;
pub mod localization;
pub mod measurement_types;
pub mod portions;
pub mod quantity_scaler;
pub mod recipe_display;
pub mod recipe_model;
pub mod scaling_config;
pub mod scaling_errors;
pub mod servings;
