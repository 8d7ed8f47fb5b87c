mod condition;
mod open_meteo;

pub use condition::condition_label;
pub use open_meteo::OpenMeteoProvider;

use async_trait::async_trait;
use serde::Serialize;

use crate::model::WeatherSnapshot;
use crate::CheirinhoError;

/// Location to look the weather up for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Weather for a named place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalWeather {
    pub location: String,
    pub snapshot: WeatherSnapshot,
}

impl Default for LocalWeather {
    /// What the app shows until (or unless) the provider answers
    fn default() -> Self {
        Self {
            location: "Belo Horizonte".to_string(),
            snapshot: WeatherSnapshot::new(20, "Ensolarado"),
        }
    }
}

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Get the provider name (e.g., "open-meteo")
    fn provider_name(&self) -> &str;

    /// Current temperature and condition at `coordinates`
    async fn current(&self, coordinates: &Coordinates) -> Result<LocalWeather, CheirinhoError>;
}
