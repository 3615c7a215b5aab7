//! OpenWeatherMap (current conditions) and WeatherAPI (forecast) clients

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::city::City;
use crate::error::FetchError;
use crate::state::{ForecastDay, WeatherSnapshot};

pub const DEFAULT_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";
/// Days requested from the forecast endpoint
pub const FORECAST_DAYS: u8 = 7;

// ============================================================================
// Current conditions (OpenWeatherMap)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    weather: Vec<CurrentWeather>,
    main: CurrentMain,
    wind: CurrentWind,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
    pressure: f64,
    humidity: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentWind {
    speed: f64,
}

/// Build a snapshot from a current-conditions response body
pub fn parse_current(city: City, body: &str) -> Result<WeatherSnapshot, FetchError> {
    let data: CurrentResponse = serde_json::from_str(body)?;
    let weather = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Parse("empty `weather` array".into()))?;

    Ok(WeatherSnapshot {
        city,
        condition: weather.main,
        icon: weather.icon,
        temperature: data.main.temp,
        temp_max: data.main.temp_max,
        temp_min: data.main.temp_min,
        feels_like: data.main.feels_like,
        wind_speed: data.wind.speed,
        pressure: data.main.pressure,
        humidity: data.main.humidity,
        observed_at: data.dt,
    })
}

// ============================================================================
// Forecast (WeatherAPI)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecast: Option<ForecastBody>,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    #[serde(default)]
    forecastday: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    date: String,
    day: ForecastDayData,
    astro: ForecastAstro,
}

#[derive(Debug, Deserialize)]
struct ForecastDayData {
    condition: ForecastCondition,
    avgtemp_c: f64,
    mintemp_c: f64,
    maxtemp_c: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastCondition {
    icon: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ForecastAstro {
    sunrise: String,
    sunset: String,
}

/// Parse a forecast body. A response without a `forecast` object yields no days.
pub fn parse_forecast(body: &str) -> Result<Vec<ForecastDay>, FetchError> {
    let data: ForecastResponse = serde_json::from_str(body)?;
    let days = data
        .forecast
        .map(|f| f.forecastday)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| ForecastDay {
            date: entry.date,
            condition: entry.day.condition.text,
            icon: entry.day.condition.icon,
            sunrise: entry.astro.sunrise,
            sunset: entry.astro.sunset,
            avg_temp_c: entry.day.avgtemp_c,
            min_temp_c: entry.day.mintemp_c,
            max_temp_c: entry.day.maxtemp_c,
        })
        .collect();
    Ok(days)
}

// ============================================================================
// Client
// ============================================================================

/// Endpoints and credentials for both weather services
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub current_url: String,
    pub forecast_url: String,
    pub openweather_key: String,
    pub weatherapi_key: String,
    pub timeout: Duration,
}

/// A fetch cycle that did not complete.
///
/// `snapshot` is set when current conditions were read before the forecast
/// call failed.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleError {
    pub error: FetchError,
    pub snapshot: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: Client,
    config: ApiConfig,
}

impl WeatherApi {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// `GET {current_url}?q={city}&appid={key}`
    pub async fn fetch_current(&self, city: City) -> Result<WeatherSnapshot, FetchError> {
        let body = self
            .get_text(
                &self.config.current_url,
                &[("q", city.name()), ("appid", self.config.openweather_key.as_str())],
            )
            .await?;
        parse_current(city, &body)
    }

    /// `GET {forecast_url}?key={key}&q={city}&days=7`
    pub async fn fetch_forecast(&self, city: City) -> Result<Vec<ForecastDay>, FetchError> {
        let days = FORECAST_DAYS.to_string();
        let body = self
            .get_text(
                &self.config.forecast_url,
                &[
                    ("key", self.config.weatherapi_key.as_str()),
                    ("q", city.name()),
                    ("days", days.as_str()),
                ],
            )
            .await?;
        parse_forecast(&body)
    }

    /// One fetch cycle: current conditions, then the forecast.
    pub async fn fetch_cycle(
        &self,
        city: City,
    ) -> Result<(WeatherSnapshot, Vec<ForecastDay>), CycleError> {
        tracing::debug!(%city, "fetch cycle started");
        let snapshot = self.fetch_current(city).await.map_err(|error| {
            tracing::warn!(%city, %error, "current conditions fetch failed");
            CycleError {
                error,
                snapshot: None,
            }
        })?;

        match self.fetch_forecast(city).await {
            Ok(forecast) => {
                tracing::debug!(%city, days = forecast.len(), "fetch cycle finished");
                Ok((snapshot, forecast))
            }
            Err(error) => {
                tracing::warn!(%city, %error, "forecast fetch failed");
                Err(CycleError {
                    error,
                    snapshot: Some(snapshot),
                })
            }
        }
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
