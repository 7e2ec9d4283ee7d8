use anyhow::Context;
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{CACHE_CONTROL, PRAGMA},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    Config, DisplayFailure,
    model::{Coordinates, WeatherReading},
};

use super::WeatherProvider;

/// Current conditions from <https://open-meteo.com>. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    api_base: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(api_base: &str, user_agent: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(&config.api_base, &config.user_agent)
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.api_base)
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<WeatherReading>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReading, DisplayFailure> {
        let request = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("latitude", coords.latitude.to_string().as_str()),
                ("longitude", coords.longitude.to_string().as_str()),
                ("current_weather", "true"),
                ("temperature_unit", "celsius"),
                ("wind_speed_unit", "kmh"),
                ("timezone", "auto"),
            ])
            // Always fetch fresh data, never a cached copy.
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .build()
            .map_err(DisplayFailure::Request)?;

        debug!("GET {}", request.url());

        let res = self
            .http
            .execute(request)
            .await
            .map_err(DisplayFailure::Request)?;

        let status = res.status();
        if !status.is_success() {
            return Err(DisplayFailure::Status(status.as_u16()));
        }

        let body = res.text().await.map_err(DisplayFailure::Request)?;

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).map_err(DisplayFailure::Decode)?;

        parsed
            .current_weather
            .ok_or(DisplayFailure::MissingCurrentWeather)
    }
}
