use thiserror::Error;

use crate::recommendation::NoRecommendation;

/// Errors that can occur while browsing, editing or recommending recipes
#[derive(Error, Debug)]
pub enum CheirinhoError {
    /// HTTP request to a remote collaborator failed
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Weather provider returned an unusable answer
    #[error("Weather lookup failed: {0}")]
    WeatherError(String),

    /// Remote recipe store rejected or garbled a request
    #[error("Recipe store error: {0}")]
    StoreError(String),

    /// Recipe draft failed validation
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// No recipe with the given identifier
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Wrong admin password
    #[error("Incorrect admin password")]
    Unauthorized,

    /// Admin password is not configured
    #[error("Admin access is disabled: no password configured")]
    AdminDisabled,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// AI recommender failed
    #[error("AI recommendation failed: {0}")]
    AiError(String),

    /// No recipe could be recommended
    #[error(transparent)]
    NoRecommendation(#[from] NoRecommendation),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
