use clap::{Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};

use cheirinho::browse::{equipment_facets, find_recipe, ingredient_facets};
use cheirinho::store::SupabaseStore;
use cheirinho::{
    load_configured_catalog, AdminGate, AppConfig, Category, CheirinhoError, Favorites,
    RecipeDraft, RecipeQuery, Recipe, Recommender, WeatherSnapshot,
};

#[derive(Parser)]
#[command(name = "cheirinho", version, about = "Coffee recipes for today's weather")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend a recipe for the current weather
    Recommend {
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
        /// Use this temperature (°C) instead of looking the weather up
        #[arg(long, allow_negative_numbers = true, requires = "condition")]
        temperature: Option<i32>,
        /// Condition label, e.g. "Chuvoso"
        #[arg(long, requires = "temperature")]
        condition: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Ask the AI recommender first
        #[arg(long)]
        ai: bool,
        #[arg(long)]
        json: bool,
    },
    /// List recipes, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        #[arg(long)]
        equipment: Vec<String>,
        /// Only favorite recipes
        #[arg(long)]
        favorites: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe in full
    Show { id: String },
    /// List the ingredients and equipment available as filters
    Facets,
    /// Add or remove a recipe from favorites
    Favorite { id: String },
    /// Edit the remote recipe collection
    Admin {
        #[arg(long)]
        password: String,
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a recipe from a JSON draft
    Add { file: PathBuf },
    /// Replace a recipe's fields with a JSON draft
    Update { id: String, file: PathBuf },
    Delete { id: String },
}

fn print_summary(recipe: &Recipe, favorites: &Favorites) {
    let star = if favorites.contains(&recipe.id) { "★" } else { " " };
    println!(
        "{} [{}] {} ({}, {}, {})",
        star, recipe.id, recipe.name, recipe.category, recipe.difficulty, recipe.prep_time
    );
}

fn print_recipe(recipe: &Recipe) {
    println!("{} [{}]", recipe.name, recipe.id);
    println!(
        "{} · {} · {} · {}",
        recipe.country, recipe.category, recipe.difficulty, recipe.prep_time
    );
    if !recipe.description.is_empty() {
        println!("\n{}", recipe.description);
    }
    println!("\nIngredientes:");
    for ingredient in &recipe.detailed_ingredients {
        println!("  - {} ({})", ingredient.name, ingredient.amount);
    }
    if !recipe.equipment.is_empty() {
        println!("\nEquipamentos:");
        for equipment in &recipe.equipment {
            println!("  - {}", equipment);
        }
    }
    println!("\nModo de preparo:");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, step.title, step.description);
    }
}

async fn read_draft(path: &Path) -> Result<RecipeDraft, CheirinhoError> {
    let content = tokio::fs::read_to_string(path).await?;
    let mut draft: RecipeDraft = serde_json::from_str(&content)?;
    draft.sync_ingredient_names();
    Ok(draft)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let favorites_path = PathBuf::from(&config.favorites_path);

    match cli.command {
        Command::Recommend {
            lat,
            lon,
            temperature,
            condition,
            seed,
            ai,
            json,
        } => {
            let mut builder = Recommender::builder().config(config).use_ai(ai);
            if let (Some(lat), Some(lon)) = (lat, lon) {
                builder = builder.coordinates(lat, lon);
            }
            if let (Some(temperature), Some(condition)) = (temperature, condition) {
                builder = builder.weather(WeatherSnapshot::new(temperature, condition));
            }
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }

            let report = builder.build().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let snapshot = &report.weather.snapshot;
                println!(
                    "{}: {}°C, {}",
                    report.weather.location, snapshot.temperature, snapshot.condition
                );
                println!("\n☕ {}", report.recipe.name);
                println!("{}", report.recommendation.reason);
            }
        }

        Command::List {
            search,
            category,
            ingredients,
            equipment,
            favorites,
            json,
        } => {
            let catalog = load_configured_catalog(&config).await?;
            if let Some(e) = &catalog.remote_error {
                eprintln!("Showing built-in recipes only: {}", e);
            }
            let saved = Favorites::load(&favorites_path).await?;
            let query = RecipeQuery {
                text: search,
                category,
                ingredients,
                equipment,
                favorites_only: favorites,
            };
            let found = query.filter(&catalog.recipes, &saved);
            debug!("{} of {} recipe(s) match", found.len(), catalog.recipes.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                println!("Nenhuma receita encontrada com esses filtros.");
            } else {
                for recipe in found {
                    print_summary(recipe, &saved);
                }
            }
        }

        Command::Show { id } => {
            let catalog = load_configured_catalog(&config).await?;
            let recipe =
                find_recipe(&catalog.recipes, &id).ok_or(CheirinhoError::RecipeNotFound(id))?;
            print_recipe(recipe);
        }

        Command::Facets => {
            let catalog = load_configured_catalog(&config).await?;
            println!("Ingredientes:");
            for ingredient in ingredient_facets(&catalog.recipes) {
                println!("  {}", ingredient);
            }
            println!("Equipamentos:");
            for equipment in equipment_facets(&catalog.recipes) {
                println!("  {}", equipment);
            }
        }

        Command::Favorite { id } => {
            let mut saved = Favorites::load(&favorites_path).await?;
            if saved.toggle(&id) {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
            saved.save(&favorites_path).await?;
        }

        Command::Admin { password, action } => {
            let store = SupabaseStore::from_config(&config.store)?.ok_or_else(|| {
                CheirinhoError::StoreError("No remote store configured".to_string())
            })?;
            let session = AdminGate::from_config(&config.admin).login(&password, &store)?;

            let recipes = match action {
                AdminAction::Add { file } => session.create(&read_draft(&file).await?).await?,
                AdminAction::Update { id, file } => {
                    session.update(&id, &read_draft(&file).await?).await?
                }
                AdminAction::Delete { id } => session.delete(&id).await?,
            };
            println!("Done. The catalog now has {} recipe(s).", recipes.len());
        }
    }

    Ok(())
}
