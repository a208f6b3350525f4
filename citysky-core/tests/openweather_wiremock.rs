//! Integration tests for the OpenWeather client and the search session
//! against a mock HTTP server.

use std::time::Duration;

use citysky_core::{
    Coordinates, IconKey, MoodColor, OpenWeatherClient, SearchOutcome, SearchSession, Theme,
    WeatherError, WeatherSource, render,
    session::{FORECAST_REJECTED_MESSAGE, WEATHER_RETRY_MESSAGE},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_KEY: &str = "test-key";

fn paris_current() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.35, "lat": 48.85 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 15.7, "feels_like": 14.1, "humidity": 70, "pressure": 1012 },
        "wind": { "speed": 3.2, "deg": 250 },
        "name": "Paris",
        "cod": 200
    })
}

/// 40 samples at 3-hour steps starting 2024-01-15 00:00; sample `i` has
/// temperature `i + 0.9`.
fn forty_samples() -> serde_json::Value {
    let icons = ["10d", "13n", "50d", "04d", "11d"];
    let list: Vec<serde_json::Value> = (0..40i32)
        .map(|i| {
            serde_json::json!({
                "dt_txt": format!("2024-01-{:02} {:02}:00:00", 15 + i / 8, (i % 8) * 3),
                "main": { "temp": f64::from(i) + 0.9, "humidity": 80 },
                "weather": [{ "main": "Rain", "icon": icons[(i / 8) as usize] }]
            })
        })
        .collect();

    serde_json::json!({ "cod": "200", "cnt": 40, "list": list })
}

fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(API_KEY.to_string(), mock_server.uri(), Some(Duration::from_secs(5)))
        .expect("Failed to create client")
}

async fn mount_current(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn current_conditions_are_mapped() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, ResponseTemplate::new(200).set_body_json(paris_current())).await;

    let client = create_test_client(&mock_server);
    let report = client.current("Paris").await.expect("current conditions");

    assert_eq!(report.conditions.temperature_f, 15);
    assert_eq!(report.conditions.humidity_pct, 70.0);
    assert_eq!(report.conditions.wind_speed_mph, 3.2);
    assert_eq!(report.conditions.location, "Paris");
    assert_eq!(report.conditions.icon, IconKey::Clear);
    assert_eq!(report.mood, MoodColor::LemonChiffon);
    assert_eq!(report.coordinates, Coordinates { lat: 48.85, lon: 2.35 });
}

#[tokio::test]
async fn unknown_city_surfaces_provider_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.current("Atlantis").await.unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(err.to_string(), "city not found");
}

#[tokio::test]
async fn non_json_error_body_is_a_decode_failure() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .await;

    let client = create_test_client(&mock_server);
    let err = client.current("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_provider_hits_timeout() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(paris_current())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let client = OpenWeatherClient::new(
        API_KEY.to_string(),
        mock_server.uri(),
        Some(Duration::from_millis(200)),
    )
    .expect("Failed to create client");
    let err = client.current("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn forecast_is_down_sampled_to_one_entry_per_day() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(forty_samples())).await;

    let client = create_test_client(&mock_server);
    let days = client.forecast(Coordinates { lat: 48.85, lon: 2.35 }).await.expect("forecast");

    let temps: Vec<i64> = days.iter().map(|d| d.temperature_f).collect();
    assert_eq!(temps, vec![0, 8, 16, 24, 32]);

    let labels: Vec<&str> = days.iter().map(|d| d.date_label.as_str()).collect();
    assert_eq!(labels, vec!["1/15/2024", "1/16/2024", "1/17/2024", "1/18/2024", "1/19/2024"]);

    let icons: Vec<IconKey> = days.iter().map(|d| d.icon).collect();
    assert_eq!(
        icons,
        vec![IconKey::Drizzle, IconKey::Snow, IconKey::Mist, IconKey::Cloud, IconKey::Clear]
    );
}

#[tokio::test]
async fn forecast_rejection_is_reported() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({ "cod": 401, "message": "Invalid API key" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.forecast(Coordinates { lat: 48.85, lon: 2.35 }).await.unwrap_err();

    assert!(err.is_rejection());
}

#[tokio::test]
async fn session_renders_full_view() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, ResponseTemplate::new(200).set_body_json(paris_current())).await;
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(forty_samples())).await;

    let session = SearchSession::new(create_test_client(&mock_server));
    assert_eq!(session.search("Paris").await, SearchOutcome::Applied);

    let view = session.snapshot().await;
    assert_eq!(view.theme, Theme::Mood(MoodColor::LemonChiffon));
    assert_eq!(view.forecast.len(), 5);

    let out = render(&view);
    assert!(out.contains("15°F"));
    assert!(out.contains("Paris"));
    assert!(out.contains("5-Day Forecast"));
    assert!(out.contains("1/19/2024"));
}

#[tokio::test]
async fn session_keeps_current_conditions_when_forecast_is_rejected() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, ResponseTemplate::new(200).set_body_json(paris_current())).await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(500).set_body_json(serde_json::json!({ "cod": 500, "message": "Internal error" })),
    )
    .await;

    let session = SearchSession::new(create_test_client(&mock_server));
    session.search("Paris").await;

    let view = session.snapshot().await;
    assert_eq!(view.current.expect("current conditions").temperature_f, 15);
    assert!(view.forecast.is_empty());
    assert_eq!(view.error.as_deref(), Some(FORECAST_REJECTED_MESSAGE));
}

#[tokio::test]
async fn current_conditions_without_humidity_take_the_retry_path() {
    let mock_server = MockServer::start().await;
    let mut body = paris_current();
    body["main"] = serde_json::json!({ "temp": 15.7 });
    mount_current(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let err = client.current("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");

    let session = SearchSession::new(client);
    session.search("Paris").await;

    let view = session.snapshot().await;
    assert!(view.current.is_none());
    assert_eq!(view.error.as_deref(), Some(WEATHER_RETRY_MESSAGE));
}
