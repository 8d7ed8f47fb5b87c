use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Remote recipe store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Admin panel settings
    #[serde(default)]
    pub admin: AdminConfig,
    /// Optional AI recommender
    #[serde(default)]
    pub ai: AiConfig,
    /// Where the CLI keeps the favorites list
    #[serde(default = "default_favorites_path")]
    pub favorites_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            store: StoreConfig::default(),
            admin: AdminConfig::default(),
            ai: AiConfig::default(),
            favorites_path: default_favorites_path(),
        }
    }
}

/// Configuration for the weather provider and the default location
#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Base URL of the Open-Meteo forecast API
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Base URL of the Nominatim reverse geocoder
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Shown when the provider is unreachable
    #[serde(default = "default_location_name")]
    pub location_name: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocode_url: default_geocode_url(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            location_name: default_location_name(),
            timeout: default_weather_timeout(),
        }
    }
}

/// Configuration for the remote (PostgREST) recipe store
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Project URL; the remote store is disabled when unset
    pub url: Option<String>,
    /// Anonymous API key (can also be set via SUPABASE_ANON_KEY)
    pub api_key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds
    #[serde(default = "default_store_timeout")]
    pub timeout: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: default_table(),
            timeout: default_store_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    /// Admin commands are refused when unset
    pub password: Option<String>,
}

/// Configuration for the Gemini recommender
#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_ai_model")]
    pub model: String,
    /// API key (can also be set via GEMINI_API_KEY)
    pub api_key: Option<String>,
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_ai_temperature")]
    pub temperature: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_ai_model(),
            api_key: None,
            base_url: default_ai_base_url(),
            temperature: default_ai_temperature(),
        }
    }
}

// Default value functions
fn default_forecast_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_geocode_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_latitude() -> f64 {
    -19.9167
}

fn default_longitude() -> f64 {
    -43.9345
}

fn default_location_name() -> String {
    "Belo Horizonte".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}

fn default_table() -> String {
    "receitas_cafe".to_string()
}

fn default_store_timeout() -> u64 {
    30
}

fn default_ai_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_ai_temperature() -> f32 {
    0.7
}

fn default_favorites_path() -> String {
    "favorites.json".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CHEIRINHO__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CHEIRINHO__STORE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: CHEIRINHO__WEATHER__LATITUDE
        .add_source(
            Environment::with_prefix("CHEIRINHO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.weather.forecast_url, "https://api.open-meteo.com");
        assert_eq!(config.weather.location_name, "Belo Horizonte");
        assert_eq!(config.weather.timeout, 10);
        assert_eq!(config.store.table, "receitas_cafe");
        assert!(config.store.url.is_none());
        assert!(config.admin.password.is_none());
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.favorites_path, "favorites.json");
        assert_eq!(config.weather.latitude, -19.9167);
        assert_eq!(config.store.timeout, 30);
    }

    #[test]
    fn test_toml_overrides_sections() {
        let toml = r#"
            favorites_path = "/tmp/favs.json"

            [store]
            url = "https://example.supabase.co"
            api_key = "anon"

            [admin]
            password = "segredo"

            [weather]
            latitude = -23.55
            longitude = -46.63
            location_name = "São Paulo"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.favorites_path, "/tmp/favs.json");
        assert_eq!(config.store.url.as_deref(), Some("https://example.supabase.co"));
        assert_eq!(config.store.table, "receitas_cafe");
        assert_eq!(config.admin.password.as_deref(), Some("segredo"));
        assert_eq!(config.weather.location_name, "São Paulo");
        assert_eq!(config.weather.forecast_url, "https://api.open-meteo.com");
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the crate root; unset sections come from defaults
        let config = load_config().unwrap();
        assert_eq!(config.store.table, "receitas_cafe");
        assert_eq!(config.weather.forecast_url, "https://api.open-meteo.com");
        assert!(!config.favorites_path.is_empty());
    }
}
