use chrono::NaiveDateTime;

use crate::theme::MoodColor;

/// Icon assets the view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Humidity,
    Wind,
}

impl IconKey {
    /// Map a provider condition code (e.g. "10n") to an icon.
    ///
    /// Unknown codes fall back to [`IconKey::Clear`].
    pub fn from_condition_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => IconKey::Clear,
            "02d" | "02n" | "03d" | "03n" | "04d" | "04n" => IconKey::Cloud,
            "09d" | "09n" => IconKey::Rain,
            "10d" | "10n" => IconKey::Drizzle,
            "13d" | "13n" => IconKey::Snow,
            "50d" | "50n" => IconKey::Mist,
            _ => IconKey::Clear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Clear => "clear",
            IconKey::Cloud => "cloud",
            IconKey::Drizzle => "drizzle",
            IconKey::Rain => "rain",
            IconKey::Snow => "snow",
            IconKey::Mist => "mist",
            IconKey::Humidity => "humidity",
            IconKey::Wind => "wind",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::Clear => "☀",
            IconKey::Cloud => "☁",
            IconKey::Drizzle => "🌦",
            IconKey::Rain => "🌧",
            IconKey::Snow => "❄",
            IconKey::Mist => "🌫",
            IconKey::Humidity => "💧",
            IconKey::Wind => "💨",
        }
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions as the view shows them.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_f: i64,
    pub humidity_pct: f64,
    pub wind_speed_mph: f64,
    pub location: String,
    pub icon: IconKey,
}

/// One day of the five-day forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date_label: String,
    pub temperature_f: i64,
    pub icon: IconKey,
}

/// Everything a successful current-conditions lookup yields.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub conditions: CurrentConditions,
    pub coordinates: Coordinates,
    pub mood: MoodColor,
}

pub fn floor_temperature(raw: f64) -> i64 {
    raw.floor() as i64
}

/// Render a forecast timestamp (`2024-01-15 12:00:00`) as `1/15/2024`.
///
/// Falls back to the date part of the raw string when it does not parse.
pub fn date_label(dt_txt: &str) -> String {
    match NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S") {
        Ok(ts) => ts.format("%-m/%-d/%Y").to_string(),
        Err(_) => dt_txt.split_whitespace().next().unwrap_or(dt_txt).to_string(),
    }
}
