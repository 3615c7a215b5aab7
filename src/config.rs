//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::alert::{AlertConfig, AlertField};
use crate::api::{ApiConfig, DEFAULT_CURRENT_URL, DEFAULT_FORECAST_URL};
use crate::city::City;
use crate::error::ConfigError;
use crate::state::{ALERT_CHECK_INTERVAL_MS, POLLING_INTERVAL_MS, PollIntervals};

/// Metro weather dashboard
#[derive(Parser, Debug)]
#[command(name = "metrowatch")]
#[command(about = "Current weather, 7-day forecast and heat alerts for Indian metro cities")]
pub struct Cli {
    /// City to show first
    #[arg(long, short, value_enum, default_value_t = City::Delhi)]
    pub city: City,

    /// OpenWeatherMap API key (current conditions)
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_key: Option<String>,

    /// WeatherAPI key (forecast)
    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
    pub weatherapi_key: Option<String>,

    /// Current-conditions endpoint
    #[arg(long, env = "METROWATCH_CURRENT_URL", default_value = DEFAULT_CURRENT_URL)]
    pub current_url: String,

    /// Forecast endpoint
    #[arg(long, env = "METROWATCH_FORECAST_URL", default_value = DEFAULT_FORECAST_URL)]
    pub forecast_url: String,

    /// Fetch interval in milliseconds
    #[arg(
        long,
        default_value_t = POLLING_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval_ms: u64,

    /// Alert-check interval in milliseconds
    #[arg(
        long,
        default_value_t = ALERT_CHECK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub alert_interval_ms: u64,

    /// Alert threshold in °C
    #[arg(
        long,
        default_value_t = 35.0,
        allow_negative_numbers = true,
        value_parser = parse_threshold
    )]
    pub threshold: f64,

    /// Consecutive breaches needed to raise an alert
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub consecutive: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout_secs: u64,

    /// Log file (defaults to the platform data directory)
    #[arg(long, env = "METROWATCH_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

impl Cli {
    pub fn alert_config(&self) -> AlertConfig {
        AlertConfig::new(self.threshold, self.consecutive)
    }

    pub fn intervals(&self) -> PollIntervals {
        PollIntervals {
            fetch_ms: self.poll_interval_ms,
            alert_check_ms: self.alert_interval_ms,
        }
    }

    /// Endpoints and credentials; both API keys must be present.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let openweather_key =
            non_empty(&self.openweather_key).ok_or(ConfigError::MissingApiKey {
                flag: "--openweather-key",
                env: "OPENWEATHER_API_KEY",
            })?;
        let weatherapi_key =
            non_empty(&self.weatherapi_key).ok_or(ConfigError::MissingApiKey {
                flag: "--weatherapi-key",
                env: "WEATHERAPI_KEY",
            })?;

        Ok(ApiConfig {
            current_url: self.current_url.clone(),
            forecast_url: self.forecast_url.clone(),
            openweather_key,
            weatherapi_key,
            timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

/// Same rule as the in-app editor: any finite number of degrees.
fn parse_threshold(input: &str) -> Result<f64, String> {
    AlertField::Threshold
        .apply(&AlertConfig::default(), input)
        .map(|config| config.threshold_temp)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
