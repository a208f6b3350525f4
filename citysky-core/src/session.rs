//! Search state machine behind the view.
//!
//! A search is validated, then runs the current-conditions lookup and, only
//! when that succeeds, the forecast lookup. Each step writes its outcome into
//! a shared [`ViewState`]. Searches may overlap; every search takes a ticket
//! and results carrying an outdated ticket are dropped instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    WeatherError,
    model::{CurrentConditions, ForecastDay},
    provider::WeatherSource,
    theme::Theme,
};

pub const WEATHER_RETRY_MESSAGE: &str = "Error fetching weather data. Please try again.";
pub const FORECAST_REJECTED_MESSAGE: &str = "Error fetching forecast data.";
pub const FORECAST_RETRY_MESSAGE: &str = "Error fetching forecast data. Please try again.";

/// Everything the renderer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<ForecastDay>,
    pub error: Option<String>,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search ran and its results (or errors) are in the view state.
    Applied,
    /// Input was rejected before any request was made.
    Invalid,
    /// A newer search started meanwhile; this one's results were dropped.
    Superseded,
}

#[derive(Debug)]
pub struct SearchSession<S> {
    source: S,
    state: Mutex<ViewState>,
    latest: AtomicU64,
}

impl<S: WeatherSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self { source, state: Mutex::new(ViewState::default()), latest: AtomicU64::new(0) }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    pub async fn search(&self, input: &str) -> SearchOutcome {
        let city = input.trim();
        if city.is_empty() {
            // No ticket: an in-flight search stays the latest one.
            self.state.lock().await.error = Some(WeatherError::EmptyCity.to_string());
            return SearchOutcome::Invalid;
        }

        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        info!(city, ticket, "searching");

        let result = self.source.current(city).await;

        let coords = {
            let mut state = self.state.lock().await;
            if !self.is_latest(ticket) {
                debug!(city, ticket, "dropping stale current conditions");
                return SearchOutcome::Superseded;
            }

            match result {
                Ok(report) => {
                    state.error = None;
                    state.theme = Theme::Mood(report.mood);
                    state.current = Some(report.conditions);
                    state.forecast.clear();
                    report.coordinates
                }
                Err(err) if err.is_rejection() => {
                    // Previous results stay on screen next to the provider's message.
                    state.error = Some(err.to_string());
                    return SearchOutcome::Applied;
                }
                Err(err) => {
                    warn!(city, error = %err, "current conditions lookup failed");
                    state.error = Some(WEATHER_RETRY_MESSAGE.to_string());
                    state.current = None;
                    state.forecast.clear();
                    return SearchOutcome::Applied;
                }
            }
        };

        let result = self.source.forecast(coords).await;

        let mut state = self.state.lock().await;
        if !self.is_latest(ticket) {
            debug!(city, ticket, "dropping stale forecast");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(days) => state.forecast = days,
            Err(err) => {
                warn!(city, error = %err, "forecast lookup failed");
                let message =
                    if err.is_rejection() { FORECAST_REJECTED_MESSAGE } else { FORECAST_RETRY_MESSAGE };
                state.error = Some(message.to_string());
            }
        }

        SearchOutcome::Applied
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
