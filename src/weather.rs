//! OpenWeather current-conditions client.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::types::WeatherCondition;
use crate::domain::weather::{WeatherReport, kelvin_to_celsius};
use crate::models::config::WeatherConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("weather api key is not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Transport(String),
    #[error("http {0}")]
    Http(u16),
    #[error("json error: {0}")]
    Decode(String),
}

/// Source of current weather at a coordinate.
pub trait WeatherSource {
    fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<WeatherReport, WeatherError>>;
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    weather: Vec<OpenWeatherCondition>,
    main: OpenWeatherMain,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    id: u32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    /// Kelvin, the API default unit.
    temp: f64,
}

impl TryFrom<OpenWeatherResponse> for WeatherReport {
    type Error = WeatherError;

    fn try_from(value: OpenWeatherResponse) -> Result<Self, Self::Error> {
        let condition = value
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Decode("response has no weather entry".to_string()))?;

        Ok(Self {
            temperature: kelvin_to_celsius(value.main.temp),
            weather: WeatherCondition::from_condition_code(condition.id),
            description: condition.description,
            location: value.name,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenWeatherClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            endpoint: format!("{}/weather", config.base_url.trim_end_matches('/')),
        })
    }
}

impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(WeatherError::Http(res.status().as_u16()));
        }

        res.json::<OpenWeatherResponse>()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?
            .try_into()
    }
}
