//! # Scaled Recipe Example
//!
//! Builds a recipe in code and prints it for every multiplier a user can
//! select, showing how amounts, fractions and Polish noun forms change.

use recipes::measurement_types::MeasureKind;
use recipes::recipe_display::build_recipe_display;
use recipes::recipe_model::{Category, IngredientNameForms, Recipe, RecipeIngredientLine};
use recipes::scaling_config::ScalingConfig;
use recipes::servings::{ServingsAdjustment, ServingsMultiplier};

fn main() -> anyhow::Result<()> {
    println!("🧑‍🍳 Scaled Recipe Example\n");

    let recipe = Recipe::new("Naleśniki")
        .with_servings(1)
        .with_category(Category::Breakfasts)
        .with_ingredient(RecipeIngredientLine::new(
            0.5,
            MeasureKind::Glass,
            IngredientNameForms::new("mąka").with_forms("mąka", "mąki", "mąk", "mąki"),
        ))
        .with_ingredient(RecipeIngredientLine::new(
            0.33,
            MeasureKind::Glass,
            IngredientNameForms::new("mleko").with_forms("mleko", "mleka", "mlek", "mleka"),
        ))
        .with_ingredient(RecipeIngredientLine::new(
            1.0,
            MeasureKind::Unit,
            IngredientNameForms::new("jajko").with_forms("jajko", "jajka", "jajek", "jajka"),
        ))
        .with_ingredient(
            RecipeIngredientLine::new(
                1.0,
                MeasureKind::Tablespoon,
                IngredientNameForms::new("masło").with_forms("masło", "masła", "maseł", "masła"),
            )
            .with_notes("roztopione"),
        )
        .with_ingredient(RecipeIngredientLine::new(
            1.0,
            MeasureKind::ToTaste,
            IngredientNameForms::new("cukier").with_forms("cukier", "cukry", "cukrów", "cukru"),
        ));

    let config = ScalingConfig::default();
    let mut multiplier = ServingsMultiplier::initial(&config);

    loop {
        let display = build_recipe_display(&recipe, multiplier)?;
        println!("📝 Multiplier {}", multiplier);
        print!("{}", display);
        println!();

        if !multiplier.can_increase() {
            break;
        }
        multiplier = multiplier.adjust(ServingsAdjustment::More);
    }

    Ok(())
}
