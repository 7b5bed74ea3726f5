//! OpenWeatherMap client for the current-weather endpoint.

use serde::Deserialize;
use thiserror::Error;

use crate::icons::WeatherIcon;
use crate::state::WeatherSnapshot;

/// Production host. Tests point the client at a local mock instead.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Shown when the provider rejects a query without saying why.
pub const CITY_NOT_FOUND: &str = "City not found";
/// Shown for transport failures and unreadable bodies.
pub const FETCH_FAILED: &str = "Failed to fetch weather data";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx status with a readable provider body. `message` already
    /// holds the provider's wording or [`CITY_NOT_FOUND`].
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

impl FetchError {
    /// The inline message the panel displays for this failure.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Provider { message, .. } => message.clone(),
            FetchError::Network(_) | FetchError::Malformed(_) => FETCH_FAILED.to_string(),
        }
    }
}

/// Thin client over `GET /data/2.5/weather`.
///
/// Requests carry no timeout: the panel keeps its spinner up until the
/// transport itself gives up.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up current conditions for `city`, metric units.
    ///
    /// The query string is sent as given, padding and all; the provider
    /// does its own trimming.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!(
            "{}/data/2.5/weather?q={}&units=metric&appid={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
        );

        tracing::debug!(city, "requesting current weather");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "provider responded");

        if !status.is_success() {
            // Error payloads look like `{"cod":"404","message":"..."}`,
            // but nothing about that shape is guaranteed.
            let parsed: serde_json::Value = serde_json::from_str(&body)?;
            let message = parsed
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| CITY_NOT_FOUND.to_string());
            return Err(FetchError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        snapshot_from_response(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
    weather: Vec<OwWeatherEntry>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeatherEntry {
    icon: String,
}

fn snapshot_from_response(response: OwCurrentResponse) -> Result<WeatherSnapshot, FetchError> {
    let icon_code = response
        .weather
        .first()
        .map(|entry| entry.icon.as_str())
        .ok_or_else(|| FetchError::Malformed("response carried no weather entry".into()))?;

    Ok(WeatherSnapshot {
        temperature_c: response.main.temp.floor() as i32,
        humidity_pct: response.main.humidity,
        wind_speed_kph: response.wind.speed,
        location: response.name,
        icon: WeatherIcon::from_code(icon_code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(temp: f64, icon: &str) -> OwCurrentResponse {
        OwCurrentResponse {
            name: "London".into(),
            main: OwMain {
                temp,
                humidity: 60.0,
            },
            wind: OwWind { speed: 3.0 },
            weather: vec![OwWeatherEntry { icon: icon.into() }],
        }
    }

    #[test]
    fn test_temperature_is_floored_not_rounded() {
        let snapshot = snapshot_from_response(response(15.9, "10d")).unwrap();
        assert_eq!(snapshot.temperature_c, 15);

        let snapshot = snapshot_from_response(response(-0.5, "13d")).unwrap();
        assert_eq!(snapshot.temperature_c, -1);
    }

    #[test]
    fn test_snapshot_resolves_the_icon_code() {
        let snapshot = snapshot_from_response(response(10.0, "10d")).unwrap();
        assert_eq!(snapshot.icon, WeatherIcon::Rain);
        assert_eq!(snapshot.location, "London");
        assert_eq!(snapshot.humidity_pct, 60.0);
        assert_eq!(snapshot.wind_speed_kph, 3.0);
    }

    #[test]
    fn test_empty_weather_array_is_malformed() {
        let mut bare = response(10.0, "10d");
        bare.weather.clear();
        let err = snapshot_from_response(bare).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(err.user_message(), FETCH_FAILED);
    }

    #[test]
    fn test_user_message_prefers_provider_wording() {
        let err = FetchError::Provider {
            status: 404,
            message: "city not found".into(),
        };
        assert_eq!(err.user_message(), "city not found");
    }
}
