//! Background "mood" derived from the primary weather condition.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodColor {
    LemonChiffon,
    SlateGrey,
    SlateBlue,
    Snow,
    LightBlue,
    LightSteelBlue,
    NavajoWhite,
}

impl MoodColor {
    /// Pick a color for a condition word such as "Clouds" or "Rain".
    ///
    /// Matching is case-insensitive; unknown words get [`MoodColor::NavajoWhite`].
    pub fn from_condition(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "clear" => MoodColor::LemonChiffon,
            "clouds" => MoodColor::SlateGrey,
            "rain" => MoodColor::SlateBlue,
            "snow" => MoodColor::Snow,
            "drizzle" => MoodColor::LightBlue,
            "mist" => MoodColor::LightSteelBlue,
            _ => MoodColor::NavajoWhite,
        }
    }

    pub fn css_name(&self) -> &'static str {
        match self {
            MoodColor::LemonChiffon => "LemonChiffon",
            MoodColor::SlateGrey => "SlateGrey",
            MoodColor::SlateBlue => "SlateBlue",
            MoodColor::Snow => "snow",
            MoodColor::LightBlue => "lightblue",
            MoodColor::LightSteelBlue => "lightsteelblue",
            MoodColor::NavajoWhite => "NavajoWhite",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MoodColor::LemonChiffon => (255, 250, 205),
            MoodColor::SlateGrey => (112, 128, 144),
            MoodColor::SlateBlue => (106, 90, 205),
            MoodColor::Snow => (255, 250, 250),
            MoodColor::LightBlue => (173, 216, 230),
            MoodColor::LightSteelBlue => (176, 196, 222),
            MoodColor::NavajoWhite => (255, 222, 173),
        }
    }
}

/// Background of the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Shown before any successful search.
    #[default]
    Neutral,
    Mood(MoodColor),
}

impl Theme {
    pub fn css_name(&self) -> &'static str {
        match self {
            Theme::Neutral => "gainsboro",
            Theme::Mood(color) => color.css_name(),
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Theme::Neutral => (220, 220, 220),
            Theme::Mood(color) => color.rgb(),
        }
    }
}
