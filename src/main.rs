use anyhow::{Context, Result};
use recipes::localization::{detect_language, LocalizationManager};
use recipes::recipe_display::build_recipe_display;
use recipes::recipe_model::load_recipe;
use recipes::scaling_config::ScalingConfig;
use recipes::servings::{ServingsAdjustment, ServingsMultiplier};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").map(|format| format == "json").unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file before the subscriber reads RUST_LOG
    dotenv::dotenv().ok();
    init_tracing();

    let mut args = env::args().skip(1);
    let recipe_path: PathBuf = args
        .next()
        .context("usage: recipes <recipe.json> [more|less]...")?
        .into();

    let config = ScalingConfig::from_env()?;
    let localization = LocalizationManager::with_default_language(&config.default_language)?;
    let language = detect_language(Some(localization.default_language()));

    let recipe = load_recipe(&recipe_path)?;
    info!("Loaded recipe '{}' ({})", recipe.name, recipe.slug());

    // Every page visit starts from the base recipe, then replays the requested steps
    let mut multiplier = ServingsMultiplier::initial(&config);
    for arg in args {
        let adjustment: ServingsAdjustment = arg.parse()?;
        multiplier = multiplier.adjust(adjustment);
    }

    let display = build_recipe_display(&recipe, multiplier)?;

    println!("{} [{}]", display.recipe_name, multiplier);
    for category in &recipe.categories {
        println!("  {}", localization.category_label(*category, language));
    }
    if let Some(portions) = &display.portions {
        let count = portions.count.to_string();
        println!(
            "{}",
            localization.get_message_with_args(
                "recipe-portions",
                language,
                &[("count", count.as_str()), ("noun", portions.noun)]
            )
        );
    }
    println!("{}:", localization.get_message_in_language("ingredients-title", language, None));
    for line in &display.lines {
        println!("  • {}", line);
    }

    Ok(())
}
