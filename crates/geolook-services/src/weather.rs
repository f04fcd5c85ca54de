//! Current weather lookup via the OpenWeather JSON API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{not_available, Coordinates, LookupError, WeatherResult};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_UNITS: &str = "metric";
const DEFAULT_LANG: &str = "pt";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    units: String,
    lang: String,
}

impl WeatherClient {
    pub fn new(api_key: &str) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, OPENWEATHER_URL)
    }

    /// Client pointed at a non-default endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            units: DEFAULT_UNITS.to_string(),
            lang: DEFAULT_LANG.to_string(),
        })
    }

    /// Override the unit system and response language.
    pub fn with_locale(mut self, units: &str, lang: &str) -> Self {
        self.units = units.to_string();
        self.lang = lang.to_string();
        self
    }

    /// Fetch current weather for the coordinates.
    ///
    /// The body's `cod` field governs success: non-200 maps to `Service`
    /// carrying the upstream message.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, coords: Coordinates) -> Result<WeatherResult, LookupError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units={}&lang={}",
            self.base_url, coords.latitude, coords.longitude, self.api_key, self.units, self.lang
        );

        let response = self.client.get(&url).send().await?;
        let body: WeatherResponse = response.json().await?;

        if body.cod != 200 {
            let message = body
                .message
                .unwrap_or_else(|| format!("status {}", body.cod));
            return Err(LookupError::Service(message));
        }

        let weather = map_response(body);
        tracing::info!("current weather for {}: {}", weather.city_name, weather.description);
        Ok(weather)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(deserialize_with = "de_cod")]
    cod: i64,
    message: Option<String>,
    #[serde(default)]
    weather: Vec<ConditionEntry>,
    main: Option<MainReadings>,
    wind: Option<WindReadings>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MainReadings {
    #[serde(default)]
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
struct WindReadings {
    #[serde(default)]
    speed: f64,
}

/// OpenWeather reports `cod` as a number on success and a string on errors.
fn de_cod<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Num(i64),
        Text(String),
    }

    match Cod::deserialize(deserializer)? {
        Cod::Num(n) => Ok(n),
        Cod::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// One decimal place, matching the upstream display precision.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn map_response(body: WeatherResponse) -> WeatherResult {
    let main = body.main.unwrap_or_default();
    let wind = body.wind.unwrap_or_default();

    WeatherResult {
        description: body
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .unwrap_or_else(not_available),
        temperature_c: round1(main.temp),
        feels_like_c: round1(main.feels_like),
        humidity_percent: main.humidity,
        wind_speed_ms: wind.speed,
        city_name: body.name.unwrap_or_else(not_available),
    }
}
