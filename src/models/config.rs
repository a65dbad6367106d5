use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default location of the optional YAML settings file.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.yaml";

/// Connection settings for the OpenAI-compatible text generation API.
#[derive(Clone, Debug, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Connection settings for the OpenWeather API.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherConfig {
    /// Weather lookups are disabled when no key is configured.
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Configuration options for the wardrobe service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory with the prebuilt client bundle, served at `/`.
    pub static_dir: Option<String>,
    pub openai: OpenAiConfig,
    pub weather: WeatherConfig,
}

impl ServerConfig {
    /// Load settings from `path` (optional), then `APP__*` environment
    /// variables, then the conventional `DATABASE_URL`, `OPENAI_API_KEY` and
    /// `OPENWEATHER_API_KEY` variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "app.db")?
            .set_default("openai.model", "gpt-4o")?
            .set_default("openai.base_url", "https://api.openai.com/v1")?
            .set_default("weather.base_url", "https://api.openweathermap.org/data/2.5")?
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("openai.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .set_override_option("weather.api_key", std::env::var("OPENWEATHER_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
