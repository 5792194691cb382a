use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::recipe_model::Category;
use crate::scaling_config::DEFAULT_LANGUAGE;

/// Languages with a bundled resource file, default first
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["pl", "en"];

const PL_RESOURCE: &str = include_str!("../locales/pl/main.ftl");
const EN_RESOURCE: &str = include_str!("../locales/en/main.ftl");

/// Localization manager for recipe page labels
///
/// Uses the concurrent Fluent bundle so a single manager can be shared
/// between request handlers behind an `Arc`.
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    default_language: String,
}

impl LocalizationManager {
    /// Create a new localization manager with every bundled language
    pub fn new() -> Result<Self> {
        Self::with_default_language(DEFAULT_LANGUAGE)
    }

    /// Create a manager falling back to `default_language` for unknown languages
    pub fn with_default_language(default_language: &str) -> Result<Self> {
        let mut bundles = HashMap::new();

        for (language, source) in [("pl", PL_RESOURCE), ("en", EN_RESOURCE)] {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(locale, source)?;
            bundles.insert(language.to_string(), bundle);
        }

        let default_language = detect_language(Some(default_language)).to_string();
        debug!(default_language = %default_language, "Loaded localization bundles");

        Ok(Self {
            bundles,
            default_language,
        })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: LanguageIdentifier, source: &str) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Labels end up in plain text and JSON, so no bidi isolation marks
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Failed to parse {} resource: {:?}", locale, errors))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Failed to add {} resource: {:?}", locale, errors))?;

        Ok(bundle)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Get a localized message in a specific language
    ///
    /// Unknown languages fall back to the default language; unknown keys
    /// produce a "Missing translation" marker rather than an error.
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(&self.default_language))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            warn!(key, language, ?errors, "Errors while formatting message");
        }

        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, language: &str, args: &[(&str, &str)]) -> String {
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message_in_language(key, language, Some(&args_map))
    }

    /// Localized label of a recipe category
    pub fn category_label(&self, category: Category, language: &str) -> String {
        self.get_message_in_language(category.message_key(), language, None)
    }

    /// All categories with their labels, in code order
    pub fn category_labels(&self, language: &str) -> Vec<(Category, String)> {
        Category::all()
            .into_iter()
            .map(|category| (category, self.category_label(category, language)))
            .collect()
    }
}

/// Map a requested language code to a supported language
///
/// Region subtags are ignored ("pl-PL" -> "pl"); anything unsupported falls
/// back to Polish.
pub fn detect_language(language_code: Option<&str>) -> &'static str {
    let Some(code) = language_code else {
        return DEFAULT_LANGUAGE;
    };

    let primary = code
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    SUPPORTED_LANGUAGES
        .into_iter()
        .find(|supported| *supported == primary)
        .unwrap_or(DEFAULT_LANGUAGE)
}
