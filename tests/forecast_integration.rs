//! Integration tests for the forecast tool using wiremock.

use mcp_openweather_server::constants::{FORECAST_ERROR_PREFIX, USER_AGENT};
use mcp_openweather_server::{CompassDirection, Config, ForecastError, Weather};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn weather_for(server_uri: &str) -> Weather {
    let config = Config::new("test-key").with_base_url(server_uri);
    Weather::new(&config).unwrap()
}

fn clear_sky() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 19.04, "lat": 47.5 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 21.5, "feels_like": 21.0, "pressure": 1015, "humidity": 45 },
        "wind": { "speed": 3.1, "deg": 90 },
        "name": "Budapest",
        "cod": 200
    })
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "47.5"))
        .and(query_param("lon", "19.04"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let weather = weather_for(&mock_server.uri());
    let text = weather.forecast_text(47.5, 19.04).await;

    assert_eq!(
        text,
        "Temperature: 21.5 C\nWind speed: 3.1 m/s\nWind direction: E\nDetailed forecast: clear sky"
    );
}

#[tokio::test]
async fn test_forecast_report_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": -4.0 },
            "wind": { "speed": 7, "deg": 200 }
        })))
        .mount(&mock_server)
        .await;

    let report = weather_for(&mock_server.uri())
        .forecast(60.17, 24.94)
        .await
        .unwrap();

    assert_eq!(report.temperature, -4.0);
    assert_eq!(report.wind_speed, "7");
    assert_eq!(report.wind_direction, CompassDirection::SSW);
    assert_eq!(report.description, "No description");
}

#[tokio::test]
async fn test_forecast_missing_weather_array() {
    let mock_server = MockServer::start().await;

    let mut body = clear_sky();
    body.as_object_mut().unwrap().remove("weather");

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let text = weather_for(&mock_server.uri()).forecast_text(47.5, 19.04).await;

    assert_eq!(
        text,
        "Temperature: 21.5 C\nWind speed: 3.1 m/s\nWind direction: E\nDetailed forecast: No description"
    );
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "999"))
        .and(query_param("lon", "-181.5"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "cod": "400",
            "message": "wrong latitude"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = weather_for(&mock_server.uri()).forecast_text(999.0, -181.5).await;

    assert!(text.starts_with(FORECAST_ERROR_PREFIX));
    assert!(text.contains("400"));
}

#[tokio::test]
async fn test_forecast_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let weather = weather_for(&mock_server.uri());

    let err = weather.forecast(47.5, 19.04).await.unwrap_err();
    assert!(matches!(err, ForecastError::Status(status) if status.as_u16() == 401));

    let text = weather.forecast_text(47.5, 19.04).await;
    assert!(text.starts_with(FORECAST_ERROR_PREFIX));
}

#[tokio::test]
async fn test_forecast_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let weather = weather_for(&mock_server.uri());

    let err = weather.forecast(47.5, 19.04).await.unwrap_err();
    assert!(matches!(err, ForecastError::Parse(_)));

    let text = weather.forecast_text(47.5, 19.04).await;
    assert!(text.starts_with(FORECAST_ERROR_PREFIX));
}

#[tokio::test]
async fn test_forecast_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there.
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let weather = weather_for(&format!("http://{}", address));

    let err = weather.forecast(47.5, 19.04).await.unwrap_err();
    assert!(matches!(err, ForecastError::Request(_)));

    let text = weather.forecast_text(47.5, 19.04).await;
    assert!(text.starts_with(FORECAST_ERROR_PREFIX));
    assert!(!text.contains("test-key"));
}

#[tokio::test]
async fn test_forecast_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(clear_sky())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = Config::new("test-key")
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let weather = Weather::new(&config).unwrap();

    let text = weather.forecast_text(47.5, 19.04).await;
    assert!(text.starts_with(FORECAST_ERROR_PREFIX));
    assert!(!text.contains("test-key"));
}

#[tokio::test]
async fn test_forecast_unexpected_field_shapes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": { "description": "x" },
            "main": { "temp": 21.5 },
            "wind": { "speed": 3.1, "deg": "90" }
        })))
        .mount(&mock_server)
        .await;

    let text = weather_for(&mock_server.uri()).forecast_text(47.5, 19.04).await;

    assert_eq!(
        text,
        "Temperature: 21.5 C\nWind speed: 3.1 m/s\nWind direction: E\nDetailed forecast: No description"
    );
}

#[tokio::test]
async fn test_forecast_missing_wind_speed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 21.5 },
            "wind": { "deg": 90 }
        })))
        .mount(&mock_server)
        .await;

    let text = weather_for(&mock_server.uri()).forecast_text(47.5, 19.04).await;

    assert_eq!(
        text,
        "Temperature: 21.5 C\nWind speed:  m/s\nWind direction: E\nDetailed forecast: No description"
    );
}
