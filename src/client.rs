use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{CURRENT_WEATHER_PATH, UNITS, USER_AGENT};
use crate::error::ForecastError;
use crate::models::CurrentWeatherResponse;

/// HTTP client for the OpenWeatherMap current weather endpoint
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl OpenWeatherClient {
    /// Builds the shared HTTP client from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: Arc::from(config.api_key.as_str()),
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
        })
    }

    /// Fetches current weather for a coordinate in metric units.
    ///
    /// Coordinates are forwarded as given; the API validates them.
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeatherResponse, ForecastError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.to_string()),
                ("units", UNITS.to_string()),
            ])
            .send()
            .await
            .map_err(ForecastError::request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status));
        }

        let body = response.text().await.map_err(ForecastError::request)?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(CurrentWeatherResponse::from_json(value))
    }
}
