//! # Recipe Display Assembly
//!
//! Combines the quantity scaler, grammar selector and portion formatter into
//! the per-recipe payload handed to the rendering layer. The multiplier is
//! always passed in by the caller's session; nothing here looks it up.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::grammar_selector::{select_grammar, GrammarSelection};
use crate::measurement_types::MeasureKind;
use crate::portions::{format_portions, PortionDisplay};
use crate::quantity_scaler::{scale_amount, scaled_quantity, DisplayAmount};
use crate::recipe_model::{Recipe, RecipeIngredientLine};
use crate::scaling_errors::ScalingError;
use crate::servings::ServingsMultiplier;

/// Display payload of a single ingredient line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDisplay {
    pub measure: MeasureKind,
    /// Base amount times multiplier, before any snapping
    pub scaled_amount: f64,
    pub amount: DisplayAmount,
    pub grammar: GrammarSelection,
    pub notes: String,
}

/// Display payload of a whole recipe for one multiplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDisplay {
    pub recipe_name: String,
    pub slug: String,
    pub multiplier: u32,
    pub can_increase: bool,
    pub can_decrease: bool,
    /// `None` for recipes without a servings concept
    pub portions: Option<PortionDisplay>,
    /// One entry per ingredient line, in recipe order
    pub lines: Vec<LineDisplay>,
}

/// Scale one ingredient line and select its grammar
pub fn build_line_display(
    line: &RecipeIngredientLine,
    multiplier: ServingsMultiplier,
) -> Result<LineDisplay, ScalingError> {
    let scaled = scaled_quantity(line.amount, multiplier)?;
    let amount = scale_amount(line.amount, multiplier, line.measure)?;
    let grammar = select_grammar(line.measure, &line.ingredient, scaled)?;

    debug!(
        ingredient = %line.ingredient.name,
        measure = %line.measure,
        base_amount = line.amount,
        scaled,
        "Scaled ingredient line"
    );

    Ok(LineDisplay {
        measure: line.measure,
        scaled_amount: scaled,
        amount,
        grammar,
        notes: line.notes.clone(),
    })
}

/// Portion display for a recipe, if it declares servings
pub fn recipe_portions(
    recipe: &Recipe,
    multiplier: ServingsMultiplier,
) -> Result<Option<PortionDisplay>, ScalingError> {
    if !recipe.has_servings {
        return Ok(None);
    }
    match recipe.servings {
        Some(servings) => Ok(Some(format_portions(servings, multiplier))),
        None => {
            warn!(recipe = %recipe.name, "Recipe declares servings but has no count");
            Err(ScalingError::validation(format!(
                "recipe '{}' declares servings but has no servings count",
                recipe.name
            )))
        }
    }
}

/// Build the display payload for a recipe at the given multiplier
pub fn build_recipe_display(
    recipe: &Recipe,
    multiplier: ServingsMultiplier,
) -> Result<RecipeDisplay, ScalingError> {
    info!(
        recipe = %recipe.name,
        multiplier = multiplier.get(),
        lines = recipe.ingredients.len(),
        "Building recipe display"
    );

    let portions = recipe_portions(recipe, multiplier)?;
    let lines = recipe
        .ingredients
        .iter()
        .map(|line| build_line_display(line, multiplier))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecipeDisplay {
        recipe_name: recipe.name.clone(),
        slug: recipe.slug(),
        multiplier: multiplier.get(),
        can_increase: multiplier.can_increase(),
        can_decrease: multiplier.can_decrease(),
        portions,
        lines,
    })
}

impl fmt::Display for LineDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        let amount = self.amount.text();
        if let Some(amount) = amount.as_deref() {
            parts.push(amount);
        }

        // "sól do smaku" reads ingredient first, everything else measure first
        match (self.measure, self.grammar.measure_name) {
            (MeasureKind::ToTaste, Some(phrase)) => {
                parts.push(&self.grammar.ingredient_name);
                parts.push(phrase);
            }
            (_, Some(measure_name)) if self.grammar.needs_measure_name => {
                parts.push(measure_name);
                parts.push(&self.grammar.ingredient_name);
            }
            _ => parts.push(&self.grammar.ingredient_name),
        }

        write!(f, "{}", parts.join(" "))?;

        if !self.notes.trim().is_empty() {
            write!(f, " ({})", self.notes.trim())?;
        }

        Ok(())
    }
}

impl fmt::Display for RecipeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.portions {
            Some(portions) => writeln!(f, "{} (na {})", self.recipe_name, portions)?,
            None => writeln!(f, "{}", self.recipe_name)?,
        }
        for line in &self.lines {
            writeln!(f, "  • {}", line)?;
        }
        Ok(())
    }
}
