use crate::{
    Config, DisplayFailure,
    model::{Coordinates, WeatherReading},
    provider::open_meteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current-conditions snapshot for `coords`.
    async fn current_weather(&self, coords: Coordinates)
    -> Result<WeatherReading, DisplayFailure>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenMeteoProvider::from_config(config)?;
    Ok(Box::new(provider))
}
