use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    WeatherError,
    model::{
        Coordinates, CurrentConditions, CurrentReport, ForecastDay, IconKey, date_label,
        floor_temperature,
    },
    theme::MoodColor,
};

use super::WeatherSource;

/// The forecast endpoint reports every 3 hours.
pub const SAMPLES_PER_DAY: usize = 8;
pub const FORECAST_DAYS: usize = 5;

/// OpenWeather client, always asking for imperial units.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { api_key, base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_current(&self, city: &str) -> Result<CurrentReport, WeatherError> {
        let url = self.endpoint("weather");
        debug!(%url, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("units", "imperial"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let err = rejection(status, &body);
            warn!(%status, error = %err, "current conditions request rejected");
            return Err(err);
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_report()
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<Vec<ForecastDay>, WeatherError> {
        let url = self.endpoint("forecast");
        debug!(%url, "requesting forecast");

        let lat = coords.lat.to_string();
        let lon = coords.lon.to_string();
        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let err = rejection(status, &body);
            warn!(%status, error = %err, "forecast request rejected");
            return Err(err);
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;
        debug!(entries = parsed.list.len(), "forecast received");

        daily_samples(&parsed.list).map(OwForecastEntry::to_day).collect()
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentReport, WeatherError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, coords: Coordinates) -> Result<Vec<ForecastDay>, WeatherError> {
        self.fetch_forecast(coords).await
    }
}

/// One sample per day out of the 3-hourly list: indices 0, 8, 16, 24, 32.
pub fn daily_samples<T>(list: &[T]) -> impl Iterator<Item = &T> {
    list.iter().step_by(SAMPLES_PER_DAY).take(FORECAST_DAYS)
}

/// Error bodies must still be JSON; anything else is treated as a decode failure.
fn rejection(status: StatusCode, body: &str) -> WeatherError {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(payload) => WeatherError::Rejected {
            status,
            message: payload.message.unwrap_or_else(|| status.to_string()),
        },
        Err(err) => WeatherError::Decode(err),
    }
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    #[serde(default)]
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
    weather: Vec<OwCondition>,
    coord: OwCoord,
}

impl OwCurrentResponse {
    fn into_report(self) -> Result<CurrentReport, WeatherError> {
        let condition = self
            .weather
            .first()
            .ok_or_else(|| WeatherError::Malformed("current conditions without weather entry".into()))?;

        Ok(CurrentReport {
            conditions: CurrentConditions {
                temperature_f: floor_temperature(self.main.temp),
                humidity_pct: self.main.humidity,
                wind_speed_mph: self.wind.speed,
                icon: IconKey::from_condition_code(&condition.icon),
                location: self.name,
            },
            coordinates: Coordinates { lat: self.coord.lat, lon: self.coord.lon },
            mood: MoodColor::from_condition(&condition.main),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwForecastMain,
    weather: Vec<OwCondition>,
}

impl OwForecastEntry {
    fn to_day(&self) -> Result<ForecastDay, WeatherError> {
        let condition = self.weather.first().ok_or_else(|| {
            WeatherError::Malformed(format!("forecast entry {} without weather entry", self.dt_txt))
        })?;

        Ok(ForecastDay {
            date_label: date_label(&self.dt_txt),
            temperature_f: floor_temperature(self.main.temp),
            icon: IconKey::from_condition_code(&condition.icon),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}
