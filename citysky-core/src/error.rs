use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single lookup against the weather provider.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The search input was empty after trimming.
    #[error("Please enter a city name.")]
    EmptyCity,

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Request to the weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload decoded but lacks a field the view needs.
    #[error("Malformed weather provider response: {0}")]
    Malformed(String),
}

impl WeatherError {
    /// True when the provider itself refused the request, as opposed to a
    /// transport or parse failure on our side.
    pub fn is_rejection(&self) -> bool {
        matches!(self, WeatherError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_provider_message() {
        let err = WeatherError::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "city not found".into(),
        };

        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn malformed_is_not_a_rejection() {
        let err = WeatherError::Malformed("no weather entries".into());
        assert!(!err.is_rejection());
    }
}
