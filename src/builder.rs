use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::ai::GeminiRecommender;
use crate::config::AppConfig;
use crate::model::{Recipe, Recommendation, WeatherBucket, WeatherSnapshot};
use crate::recommendation::{classify, recommend};
use crate::store::{load_catalog, RecipeStore, SupabaseStore};
use crate::weather::{Coordinates, LocalWeather, OpenMeteoProvider, WeatherProvider};
use crate::CheirinhoError;

/// Everything the recommendation card shows
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub weather: LocalWeather,
    pub bucket: WeatherBucket,
    pub recommendation: Recommendation,
    pub recipe: Recipe,
}

/// Builder for configuring and running a recommendation
#[derive(Default)]
pub struct RecommenderBuilder {
    config: Option<AppConfig>,
    coordinates: Option<Coordinates>,
    weather: Option<WeatherSnapshot>,
    weather_provider: Option<Box<dyn WeatherProvider>>,
    store: Option<Box<dyn RecipeStore>>,
    recipes: Option<Vec<Recipe>>,
    seed: Option<u64>,
    use_ai: Option<bool>,
}

impl RecommenderBuilder {
    /// Use an explicit configuration instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Look the weather up at these coordinates
    ///
    /// # Example
    /// ```
    /// use cheirinho::Recommender;
    ///
    /// let builder = Recommender::builder().coordinates(-23.55, -46.63);
    /// ```
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates::new(latitude, longitude));
        self
    }

    /// Skip the weather provider and use this snapshot, reported at the
    /// configured location name
    ///
    /// # Example
    /// ```
    /// use cheirinho::{Recommender, WeatherSnapshot};
    ///
    /// let builder = Recommender::builder().weather(WeatherSnapshot::new(30, "Ensolarado"));
    /// ```
    pub fn weather(mut self, snapshot: WeatherSnapshot) -> Self {
        self.weather = Some(snapshot);
        self
    }

    pub fn weather_provider(mut self, provider: Box<dyn WeatherProvider>) -> Self {
        self.weather_provider = Some(provider);
        self
    }

    pub fn store(mut self, store: Box<dyn RecipeStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Skip the store and recommend from this collection
    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(recipes);
        self
    }

    /// Seed the random pick for reproducible results
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Ask the AI recommender first (overrides `ai.enabled`)
    pub fn use_ai(mut self, enabled: bool) -> Self {
        self.use_ai = Some(enabled);
        self
    }

    /// Fetch weather and recipes as needed, then recommend
    ///
    /// # Errors
    /// Returns `CheirinhoError` if:
    /// - The coordinates are out of range (`BuilderError`)
    /// - The configured store or provider cannot be created
    /// - The recipe collection is empty (`NoRecommendation`)
    ///
    /// Weather and store failures during the lookup itself are logged and
    /// replaced by the default weather and the static recipes.
    ///
    /// # Example
    /// ```no_run
    /// # use cheirinho::Recommender;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = Recommender::builder().build().await?;
    /// println!("{}: {}", report.recipe.name, report.recommendation.reason);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<RecommendationReport, CheirinhoError> {
        let config = self.config.unwrap_or_default();

        if let Some(at) = &self.coordinates {
            if !(-90.0..=90.0).contains(&at.latitude) || !(-180.0..=180.0).contains(&at.longitude) {
                return Err(CheirinhoError::BuilderError(format!(
                    "Coordinates out of range: {}, {}",
                    at.latitude, at.longitude
                )));
            }
        }

        let weather = match self.weather {
            Some(snapshot) => LocalWeather {
                location: config.weather.location_name.clone(),
                snapshot,
            },
            None => {
                let provider: Box<dyn WeatherProvider> = match self.weather_provider {
                    Some(provider) => provider,
                    None => Box::new(OpenMeteoProvider::new(&config.weather)?),
                };
                let at = self.coordinates.unwrap_or_else(|| {
                    Coordinates::new(config.weather.latitude, config.weather.longitude)
                });
                match provider.current(&at).await {
                    Ok(weather) => weather,
                    Err(e) => {
                        warn!(
                            "Weather lookup via {} failed, using default: {}",
                            provider.provider_name(),
                            e
                        );
                        LocalWeather {
                            location: config.weather.location_name.clone(),
                            ..LocalWeather::default()
                        }
                    }
                }
            }
        };

        let recipes = match self.recipes {
            Some(recipes) => recipes,
            None => {
                let store: Option<Box<dyn RecipeStore>> = match self.store {
                    Some(store) => Some(store),
                    None => SupabaseStore::from_config(&config.store)?
                        .map(|s| Box::new(s) as Box<dyn RecipeStore>),
                };
                load_catalog(store.as_deref()).await.recipes
            }
        };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snapshot = &weather.snapshot;
        let bucket = classify(snapshot.temperature, &snapshot.condition);
        let recommendation = if self.use_ai.unwrap_or(config.ai.enabled) {
            match GeminiRecommender::new(&config.ai) {
                Ok(gemini) => {
                    gemini
                        .recommend_or_fallback(snapshot, &recipes, &mut rng)
                        .await?
                }
                Err(e) => {
                    warn!("AI recommender unavailable, using local engine: {}", e);
                    recommend(snapshot, &recipes, &mut rng)?
                }
            }
        } else {
            recommend(snapshot, &recipes, &mut rng)?
        };

        let recipe = recipes
            .iter()
            .find(|r| r.id == recommendation.recipe_id)
            .cloned()
            .ok_or_else(|| CheirinhoError::RecipeNotFound(recommendation.recipe_id.clone()))?;
        info!(
            "Recommending '{}' for {}°C {} ({})",
            recipe.name, snapshot.temperature, snapshot.condition, bucket
        );

        Ok(RecommendationReport {
            weather,
            bucket,
            recommendation,
            recipe,
        })
    }
}

/// Main entry point for the builder API
pub struct Recommender;

impl Recommender {
    /// Creates a new builder for recommending a recipe
    ///
    /// # Example
    /// ```
    /// use cheirinho::Recommender;
    ///
    /// let builder = Recommender::builder();
    /// ```
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::default()
    }
}
