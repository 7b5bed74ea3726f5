//! WeatherClient against a mock provider.

use pretty_assertions::assert_eq;
use serde_json::json;
use weatherdash::api::{FetchError, WeatherClient, CITY_NOT_FOUND, FETCH_FAILED};
use weatherdash::icons::WeatherIcon;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn london_body() -> serde_json::Value {
    json!({
        "name": "London",
        "main": { "temp": 15.9, "humidity": 60 },
        "wind": { "speed": 3 },
        "weather": [{ "icon": "10d" }]
    })
}

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(server.uri(), "test-key")
}

#[tokio::test]
async fn test_current_weather_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .current_weather("London")
        .await
        .unwrap();

    assert_eq!(snapshot.temperature_c, 15);
    assert_eq!(snapshot.humidity_pct, 60.0);
    assert_eq!(snapshot.wind_speed_kph, 3.0);
    assert_eq!(snapshot.location, "London");
    assert_eq!(snapshot.icon, WeatherIcon::Rain);
}

#[tokio::test]
async fn test_query_is_sent_exactly_as_typed() {
    let server = MockServer::start().await;
    // Padding survives all the way to the provider; encoding is purely
    // transport-level.
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", " New York "))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).current_weather(" New York ").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_not_found_surfaces_the_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("Nowhereville")
        .await
        .unwrap_err();

    match &err {
        FetchError::Provider { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected a provider error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "city not found");
}

#[tokio::test]
async fn test_not_found_without_a_message_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "cod": "404" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("Nowhereville")
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), CITY_NOT_FOUND);
}

#[tokio::test]
async fn test_unreadable_error_body_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
    assert_eq!(err.user_message(), FETCH_FAILED);
}

#[tokio::test]
async fn test_success_without_weather_entries_is_a_fetch_failure() {
    let server = MockServer::start().await;
    let mut body = london_body();
    body["weather"] = json!([]);
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
    assert_eq!(err.user_message(), FETCH_FAILED);
}

#[tokio::test]
async fn test_success_with_missing_fields_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "London" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Nothing listens on this port.
    let client = WeatherClient::new("http://127.0.0.1:9", "test-key");

    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.user_message(), FETCH_FAILED);
}

#[tokio::test]
async fn test_floor_applies_to_negative_temperatures() {
    let server = MockServer::start().await;
    let mut body = london_body();
    body["main"]["temp"] = json!(-0.5);
    body["weather"] = json!([{ "icon": "13d" }]);
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .current_weather("Oslo")
        .await
        .unwrap();

    assert_eq!(snapshot.temperature_c, -1);
    assert_eq!(snapshot.icon, WeatherIcon::Snow);
}
