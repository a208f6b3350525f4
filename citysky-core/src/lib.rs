//! Core library for the `citysky` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind the [`WeatherSource`] seam
//! - View-models, icon and mood tables
//! - The search session and a plain-text renderer
//!
//! It is used by `citysky-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod session;
pub mod theme;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Coordinates, CurrentConditions, CurrentReport, ForecastDay, IconKey};
pub use provider::{WeatherSource, openweather::OpenWeatherClient, source_from_config};
pub use render::render;
pub use session::{SearchOutcome, SearchSession, ViewState};
pub use theme::{MoodColor, Theme};
