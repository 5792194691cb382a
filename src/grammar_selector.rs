//! # Grammar Selector Module
//!
//! Picks the grammatically correct measure noun and ingredient name form for a
//! scaled quantity.
//!
//! | Measure                           | Measure noun              | Ingredient form        |
//! |-----------------------------------|---------------------------|------------------------|
//! | teaspoon, tablespoon, glass, gram | declined by class         | `name_half`            |
//! | pinch                             | singular form only        | `name_half`            |
//! | to taste                          | fixed phrase ("do smaku") | `name_one`             |
//! | unit                              | none                      | declined by class      |

use serde::Serialize;
use tracing::error;

use crate::grammar_tables::{DeclinedNoun, GrammarTable};
use crate::measurement_types::{classify, MeasureKind, QuantityClass};
use crate::recipe_model::IngredientNameForms;
use crate::scaling_errors::ScalingError;

/// Noun forms chosen for one ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarSelection {
    pub needs_measure_name: bool,
    pub measure_name: Option<&'static str>,
    pub ingredient_name: String,
}

/// Select measure noun and ingredient name for a scaled quantity
pub fn select_grammar(
    measure: MeasureKind,
    ingredient: &IngredientNameForms,
    quantity: f64,
) -> Result<GrammarSelection, ScalingError> {
    let class = classify(quantity);
    let table = measure.grammar();

    let selection = match measure {
        MeasureKind::Teaspoon | MeasureKind::Tablespoon | MeasureKind::Glass | MeasureKind::Gram => {
            GrammarSelection {
                needs_measure_name: true,
                measure_name: Some(declined(measure, table)?.form(class)),
                ingredient_name: ingredient.form(QuantityClass::Fractional).to_string(),
            }
        }
        MeasureKind::Pinch => GrammarSelection {
            needs_measure_name: true,
            measure_name: Some(declined(measure, table)?.form(QuantityClass::Singular)),
            ingredient_name: ingredient.form(QuantityClass::Fractional).to_string(),
        },
        MeasureKind::ToTaste => {
            let GrammarTable::Fixed(phrase) = table else {
                return Err(table_mismatch(measure, "a fixed phrase"));
            };
            GrammarSelection {
                needs_measure_name: true,
                measure_name: Some(*phrase),
                ingredient_name: ingredient.form(QuantityClass::Singular).to_string(),
            }
        }
        MeasureKind::Unit => GrammarSelection {
            needs_measure_name: false,
            measure_name: None,
            ingredient_name: ingredient.form(class).to_string(),
        },
    };

    Ok(selection)
}

fn declined(
    measure: MeasureKind,
    table: &'static GrammarTable,
) -> Result<&'static DeclinedNoun, ScalingError> {
    match table {
        GrammarTable::Declined(noun) => Ok(noun),
        _ => Err(table_mismatch(measure, "declined noun forms")),
    }
}

fn table_mismatch(measure: MeasureKind, expected: &str) -> ScalingError {
    error!(%measure, expected, "Grammar table does not match measure policy");
    ScalingError::configuration(format!(
        "grammar table for measure '{measure}' does not provide {expected}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> IngredientNameForms {
        IngredientNameForms::new("mąka").with_forms("mąka", "mąki", "mąk", "mąki")
    }

    #[test]
    fn test_declined_measure_uses_class() {
        let selection = select_grammar(MeasureKind::Glass, &flour(), 1.0).unwrap();
        assert_eq!(selection.measure_name, Some("szklanka"));
        assert_eq!(selection.ingredient_name, "mąki");

        let selection = select_grammar(MeasureKind::Glass, &flour(), 2.5).unwrap();
        assert_eq!(selection.measure_name, Some("szklanki"));
    }

    #[test]
    fn test_pinch_is_always_singular() {
        let selection = select_grammar(MeasureKind::Pinch, &flour(), 6.0).unwrap();
        assert!(selection.needs_measure_name);
        assert_eq!(selection.measure_name, Some("szczypta"));
        assert_eq!(selection.ingredient_name, "mąki");
    }

    #[test]
    fn test_to_taste_uses_one_form() {
        let salt = IngredientNameForms::new("sól").with_forms("sól", "sole", "soli", "soli");
        let selection = select_grammar(MeasureKind::ToTaste, &salt, 3.0).unwrap();
        assert_eq!(selection.measure_name, Some("do smaku"));
        assert_eq!(selection.ingredient_name, "sól");
    }

    #[test]
    fn test_unit_substitutes_ingredient_name() {
        let selection = select_grammar(MeasureKind::Unit, &flour(), 5.0).unwrap();
        assert!(!selection.needs_measure_name);
        assert_eq!(selection.measure_name, None);
        assert_eq!(selection.ingredient_name, "mąk");
    }
}
