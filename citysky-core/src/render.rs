//! Plain-text projection of a [`ViewState`].
//!
//! The output carries no styling; the caller decides how to paint the
//! view's [`Theme`](crate::theme::Theme) behind it.

use crate::{
    model::{CurrentConditions, ForecastDay, IconKey},
    session::ViewState,
};

pub const TITLE: &str = "Weather Forecast";
pub const SEARCH_HINT: &str = "Search: type a city name and press Enter";
pub const FORECAST_HEADING: &str = "5-Day Forecast";

/// Lines of the view, each terminated by a newline.
pub fn render(view: &ViewState) -> String {
    let mut lines = vec![TITLE.to_string(), SEARCH_HINT.to_string()];

    if let Some(error) = view.error.as_deref().filter(|e| !e.is_empty()) {
        lines.push(String::new());
        lines.push(format!("! {error}"));
    }

    if let Some(current) = &view.current {
        lines.extend(current_lines(current));

        if !view.forecast.is_empty() {
            lines.extend(forecast_lines(&view.forecast));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn icon_label(icon: IconKey) -> String {
    format!("{} {}", icon.glyph(), icon.as_str())
}

fn current_lines(current: &CurrentConditions) -> Vec<String> {
    vec![
        String::new(),
        icon_label(current.icon),
        format!("{}°F", current.temperature_f),
        current.location.clone(),
        format!(
            "{}  {} Humidity    {}  {} Wind Speed",
            IconKey::Humidity.glyph(),
            current.humidity_pct,
            IconKey::Wind.glyph(),
            current.wind_speed_mph,
        ),
    ]
}

fn forecast_lines(days: &[ForecastDay]) -> Vec<String> {
    let mut lines = vec![String::new(), FORECAST_HEADING.to_string()];
    lines.extend(days.iter().map(|day| {
        format!("  {:<10} {:<12} {}°F", day.date_label, icon_label(day.icon), day.temperature_f)
    }));
    lines
}
