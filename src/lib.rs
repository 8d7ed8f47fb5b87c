pub mod admin;
pub mod ai;
pub mod browse;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod recommendation;
pub mod store;
pub mod weather;

// Re-export main types
pub use admin::{AdminGate, AdminSession, RecipeDraft};
pub use browse::{Favorites, RecipeQuery};
pub use builder::{RecommendationReport, Recommender, RecommenderBuilder};
pub use config::AppConfig;
pub use error::CheirinhoError;
pub use model::{
    Category, Difficulty, Ingredient, Recipe, Recommendation, Step, WeatherBucket,
    WeatherSnapshot,
};
pub use recommendation::{classify, recommend, NoRecommendation};
pub use store::{load_catalog, Catalog, RecipeStore};
pub use weather::{Coordinates, LocalWeather, WeatherProvider};

use store::SupabaseStore;

/// Convenience function to recommend a recipe for a known weather snapshot
/// using the configured catalog.
///
/// # Example
/// ```no_run
/// # use cheirinho::{recommend_for_weather, WeatherSnapshot};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = recommend_for_weather(WeatherSnapshot::new(28, "Ensolarado")).await?;
/// println!("{}", report.recipe.name);
/// # Ok(())
/// # }
/// ```
pub async fn recommend_for_weather(
    snapshot: WeatherSnapshot,
) -> Result<RecommendationReport, CheirinhoError> {
    Recommender::builder()
        .config(AppConfig::load()?)
        .weather(snapshot)
        .build()
        .await
}

/// Convenience function to load the catalog described by `config`.
///
/// A failing remote store is logged and reported in
/// [`Catalog::remote_error`]; only a malformed store configuration is an
/// error.
pub async fn load_configured_catalog(config: &AppConfig) -> Result<Catalog, CheirinhoError> {
    let store = SupabaseStore::from_config(&config.store)?;
    Ok(load_catalog(store.as_ref().map(|s| s as &dyn RecipeStore)).await)
}
