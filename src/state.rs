//! Application state - single source of truth

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alert::{AlertConfig, AlertCounts, AlertField, AlertLog};
use crate::city::City;

/// Fetch timer period
pub const POLLING_INTERVAL_MS: u64 = 300_000;
/// Alert-check timer period
pub const ALERT_CHECK_INTERVAL_MS: u64 = 60_000;

/// Kelvin to Celsius, rounded to two decimals.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    ((kelvin - 273.15) * 100.0).round() / 100.0
}

/// Current conditions from the OpenWeatherMap API.
///
/// Temperatures are stored in kelvin as received; conversion happens at
/// display and evaluation time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub city: City,
    /// `weather[0].main`, e.g. "Clear"
    pub condition: String,
    /// OpenWeatherMap icon code, e.g. "01d"
    pub icon: String,
    pub temperature: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub feels_like: f64,
    /// m/s
    pub wind_speed: f64,
    /// hPa
    pub pressure: f64,
    /// percent
    pub humidity: f64,
    /// Observation time, unix seconds
    pub observed_at: i64,
}

impl WeatherSnapshot {
    pub fn celsius(&self) -> f64 {
        kelvin_to_celsius(self.temperature)
    }

    /// Observation time as shown in the "Last Updated" line
    pub fn observed_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.observed_at, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// One day of the WeatherAPI forecast (temperatures already in Celsius)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: String,
    pub condition: String,
    pub icon: String,
    pub sunrise: String,
    pub sunset: String,
    pub avg_temp_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
}

/// Temperature display unit
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Kelvin,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Kelvin,
            TempUnit::Kelvin => TempUnit::Celsius,
        }
    }

    /// Format a kelvin reading in this unit; the value itself is untouched.
    pub fn format(&self, kelvin: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.2} °C", kelvin_to_celsius(kelvin)),
            TempUnit::Kelvin => format!("{:.2} K", kelvin),
        }
    }
}

/// Timer periods for one polling session
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PollIntervals {
    pub fetch_ms: u64,
    pub alert_check_ms: u64,
}

impl PollIntervals {
    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }

    pub fn alert_check(&self) -> Duration {
        Duration::from_millis(self.alert_check_ms)
    }
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            fetch_ms: POLLING_INTERVAL_MS,
            alert_check_ms: ALERT_CHECK_INTERVAL_MS,
        }
    }
}

/// Polling session for the selected city.
///
/// A new session (with a fresh id) starts on every city change. Timer
/// actions carry the id they were scheduled for; the reducer drops any whose
/// id no longer matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitySession {
    pub id: u64,
    pub city: City,
}

impl CitySession {
    pub fn succeed(&self, city: City) -> Self {
        Self {
            id: self.id.wrapping_add(1),
            city,
        }
    }
}

/// Inline editor for one alert config field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlertEditor {
    pub field: AlertField,
    pub input: String,
    pub error: Option<String>,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Session ---
    #[debug(section = "Session", label = "City", debug_fmt)]
    pub session: CitySession,

    /// False until the first session has been started
    #[debug(section = "Session", label = "Started")]
    pub started: bool,

    #[debug(section = "Session", label = "Intervals", debug_fmt)]
    pub intervals: PollIntervals,

    // --- Weather ---
    /// Latest current conditions for the session city
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub snapshot: Option<WeatherSnapshot>,

    #[debug(section = "Weather", label = "Forecast", debug_fmt)]
    pub forecast: Vec<ForecastDay>,

    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    /// Set when the last fetch cycle failed; cleared by the next success
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    // --- Alerts ---
    #[debug(section = "Alerts", label = "Config", debug_fmt)]
    pub alert_config: AlertConfig,

    #[debug(section = "Alerts", label = "Counts", debug_fmt)]
    pub alert_counts: AlertCounts,

    #[debug(section = "Alerts", label = "Log", debug_fmt)]
    pub alert_log: AlertLog,

    #[debug(skip)]
    pub alert_editor: Option<AlertEditor>,
}

impl AppState {
    /// State for `city`, before its session has been started
    pub fn new(city: City, alert_config: AlertConfig, intervals: PollIntervals) -> Self {
        Self {
            session: CitySession { id: 0, city },
            started: false,
            intervals,
            snapshot: None,
            forecast: Vec::new(),
            loading: false,
            error: None,
            unit: TempUnit::default(),
            alert_config,
            alert_counts: AlertCounts::default(),
            alert_log: AlertLog::default(),
            alert_editor: None,
        }
    }

    pub fn city(&self) -> City {
        self.session.city
    }

    pub fn is_editing(&self) -> bool {
        self.alert_editor.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(City::default(), AlertConfig::default(), PollIntervals::default())
    }
}
