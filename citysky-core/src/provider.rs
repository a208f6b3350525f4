use crate::{
    Config, WeatherError,
    model::{Coordinates, CurrentReport, ForecastDay},
    provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Upstream source of weather data for the search session.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Current conditions for a city name.
    async fn current(&self, city: &str) -> Result<CurrentReport, WeatherError>;

    /// Daily forecast for a coordinate pair, at most five days.
    async fn forecast(&self, coords: Coordinates) -> Result<Vec<ForecastDay>, WeatherError>;
}

/// Construct the OpenWeather client from config, with an optional API key
/// override taking precedence over the stored one.
pub fn source_from_config(
    config: &Config,
    api_key_override: Option<&str>,
) -> anyhow::Result<OpenWeatherClient> {
    let api_key = config.resolve_api_key(api_key_override)?;
    OpenWeatherClient::new(api_key, config.base_url.clone(), config.timeout())
}
