//! # Recipe Read Model
//!
//! This module defines the read model the scaling core consumes: a recipe with
//! its ordered ingredient lines, each ingredient carrying pre-declined name
//! forms. Records are produced by the persistence layer (or loaded from JSON)
//! and are never mutated by scaling.
//!
//! ## Usage
//!
//! ```rust
//! use recipes::recipe_model::{IngredientNameForms, RecipeIngredientLine};
//! use recipes::measurement_types::MeasureKind;
//!
//! let sugar = IngredientNameForms::new("cukier")
//!     .with_forms("cukier", "cukry", "cukrów", "cukru");
//! let line = RecipeIngredientLine::new(2.0, MeasureKind::Tablespoon, sugar)
//!     .with_notes("drobny");
//! assert_eq!(line.notes, "drobny");
//! ```

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::measurement_types::{MeasureKind, QuantityClass};
use crate::scaling_errors::ScalingError;

lazy_static! {
    static ref SLUG_STRIP_REGEX: Regex =
        Regex::new(r"[^\w\s-]").expect("Slug strip pattern should be valid");
    static ref SLUG_DASH_REGEX: Regex =
        Regex::new(r"[-\s]+").expect("Slug dash pattern should be valid");
}

/// An ingredient's declined name variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientNameForms {
    /// Base name, used when a declined form is missing
    pub name: String,
    /// Form used with exactly one ("jajko")
    #[serde(default)]
    pub name_one: String,
    /// Form used with 2, 3 and 4 ("jajka")
    #[serde(default)]
    pub name_two: String,
    /// Form used with five and more ("jajek")
    #[serde(default)]
    pub name_five: String,
    /// Form used with fractions and after a measure noun ("jajka")
    #[serde(default)]
    pub name_half: String,
}

impl IngredientNameForms {
    /// Create name forms with only the base name set
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_one: String::new(),
            name_two: String::new(),
            name_five: String::new(),
            name_half: String::new(),
        }
    }

    /// Set all four declined forms
    pub fn with_forms(mut self, one: &str, two: &str, five: &str, half: &str) -> Self {
        self.name_one = one.to_string();
        self.name_two = two.to_string();
        self.name_five = five.to_string();
        self.name_half = half.to_string();
        self
    }

    /// Declined form for a quantity class, falling back to the base name
    pub fn form(&self, class: QuantityClass) -> &str {
        let form = match class {
            QuantityClass::Singular => &self.name_one,
            QuantityClass::Few => &self.name_two,
            QuantityClass::Many => &self.name_five,
            QuantityClass::Fractional => &self.name_half,
        };
        if form.trim().is_empty() {
            &self.name
        } else {
            form
        }
    }
}

/// One ingredient line of a recipe, expressed for the base serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Amount for multiplier 1
    pub amount: f64,
    pub measure: MeasureKind,
    pub ingredient: IngredientNameForms,
    /// Free-text preparation notes ("posiekana", "w temperaturze pokojowej")
    #[serde(default)]
    pub notes: String,
}

impl RecipeIngredientLine {
    pub fn new(amount: f64, measure: MeasureKind, ingredient: IngredientNameForms) -> Self {
        Self {
            amount,
            measure,
            ingredient,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

/// Recipe categories, persisted as codes 1 through 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfasts,
    Suppers,
    Dinners,
    Lunches,
    Desserts,
    Other,
}

impl Category {
    pub fn all() -> [Category; 6] {
        [
            Category::Breakfasts,
            Category::Suppers,
            Category::Dinners,
            Category::Lunches,
            Category::Desserts,
            Category::Other,
        ]
    }

    pub fn code(self) -> u8 {
        match self {
            Category::Breakfasts => 1,
            Category::Suppers => 2,
            Category::Dinners => 3,
            Category::Lunches => 4,
            Category::Desserts => 5,
            Category::Other => 6,
        }
    }

    /// Localization key of the category label
    pub fn message_key(self) -> &'static str {
        match self {
            Category::Breakfasts => "category-breakfasts",
            Category::Suppers => "category-suppers",
            Category::Dinners => "category-dinners",
            Category::Lunches => "category-lunches",
            Category::Desserts => "category-desserts",
            Category::Other => "category-other",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = ScalingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Category::all()
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| ScalingError::configuration(format!("unknown category code {code}")))
    }
}

/// A recipe as handed over by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub meal_description: String,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub prep_instructions: String,
    /// Whether the recipe is written for a number of servings at all
    pub has_servings: bool,
    /// Base serving count (multiplier 1)
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientLine>,
}

impl Recipe {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            meal_description: String::new(),
            prep_time: None,
            prep_instructions: String::new(),
            has_servings: false,
            servings: None,
            categories: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Declare the base serving count
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.has_servings = true;
        self.servings = Some(servings);
        self
    }

    pub fn with_ingredient(mut self, line: RecipeIngredientLine) -> Self {
        self.ingredients.push(line);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// URL slug derived from the recipe name
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Turn a name into a URL slug
///
/// Lowercases, drops anything that is not a word character, whitespace or a
/// hyphen, collapses whitespace and hyphen runs into one `-` and trims
/// leading/trailing `-` and `_`. Non-ASCII letters are kept.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = SLUG_STRIP_REGEX.replace_all(&lowered, "");
    let dashed = SLUG_DASH_REGEX.replace_all(stripped.trim(), "-");
    dashed.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Load a recipe read model from a JSON file
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
    let recipe: Recipe = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;
    Ok(recipe)
}
