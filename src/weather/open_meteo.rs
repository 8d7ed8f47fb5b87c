use crate::config::WeatherConfig;
use crate::model::WeatherSnapshot;
use crate::weather::{condition_label, Coordinates, LocalWeather, WeatherProvider};
use crate::CheirinhoError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const UNKNOWN_LOCATION: &str = "Sua Localização";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u16,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocode {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl Address {
    fn place_name(self) -> Option<String> {
        self.city.or(self.town).or(self.village)
    }
}

/// Open-Meteo forecast plus Nominatim reverse geocoding
pub struct OpenMeteoProvider {
    client: Client,
    forecast_url: String,
    geocode_url: String,
}

impl OpenMeteoProvider {
    /// Create a new provider from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self, CheirinhoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            // Nominatim rejects requests without an identifying agent
            .user_agent(concat!("cheirinho/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(OpenMeteoProvider {
            client,
            forecast_url: config.forecast_url.trim_end_matches('/').to_string(),
            geocode_url: config.geocode_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_urls(forecast_url: String, geocode_url: String) -> Self {
        OpenMeteoProvider {
            client: Client::new(),
            forecast_url,
            geocode_url,
        }
    }

    async fn fetch_snapshot(&self, at: &Coordinates) -> Result<WeatherSnapshot, CheirinhoError> {
        let response = self
            .client
            .get(format!("{}/v1/forecast", self.forecast_url))
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(CheirinhoError::WeatherError(format!(
                "Open-Meteo error ({}): {}",
                status, error_text
            )));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| CheirinhoError::WeatherError(format!("Malformed forecast: {}", e)))?;
        debug!("Open-Meteo current weather: {:?}", body.current_weather);

        Ok(WeatherSnapshot::new(
            body.current_weather.temperature.round() as i32,
            condition_label(body.current_weather.weathercode),
        ))
    }

    async fn fetch_place_name(&self, at: &Coordinates) -> Result<Option<String>, CheirinhoError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.geocode_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ReverseGeocode = response.json().await?;
        Ok(body.address.place_name())
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn provider_name(&self) -> &str {
        "open-meteo"
    }

    async fn current(&self, coordinates: &Coordinates) -> Result<LocalWeather, CheirinhoError> {
        let snapshot = self.fetch_snapshot(coordinates).await?;

        let location = match self.fetch_place_name(coordinates).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_LOCATION.to_string(),
            Err(e) => {
                warn!("Reverse geocoding failed: {}", e);
                UNKNOWN_LOCATION.to_string()
            }
        };

        Ok(LocalWeather { location, snapshot })
    }
}
