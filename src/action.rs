//! Actions: user intents, timer ticks and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alert::AlertField;
use crate::city::City;
use crate::error::FetchError;
use crate::state::{ForecastDay, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City category =====
    /// Switch to another city (starts a new polling session)
    CitySelect(City),

    // ===== Session category =====
    /// Start polling the initial city
    SessionStart,

    /// Fetch timer fired for the given session id
    SessionPollDue(u64),

    /// Alert-check timer fired for the given session id
    SessionAlertCheckDue(u64),

    // ===== Weather category =====
    /// Intent: refresh now
    WeatherFetch,

    /// Result: both reads succeeded for `city`
    WeatherDidLoad {
        city: City,
        snapshot: WeatherSnapshot,
        forecast: Vec<ForecastDay>,
    },

    /// Result: the cycle for `city` failed. `snapshot` is set when only the
    /// forecast read failed.
    WeatherDidError {
        city: City,
        error: FetchError,
        snapshot: Option<WeatherSnapshot>,
    },

    // ===== Alert category =====
    /// Open the editor for one alert config field
    AlertEditOpen(AlertField),

    /// Close the editor without applying
    AlertEditClose,

    /// Editor text changed
    AlertEditChange(String),

    /// Apply the editor text
    AlertEditSubmit(String),

    /// Empty the alert log
    AlertLogClear,

    // ===== UI category =====
    /// Toggle between Celsius and Kelvin
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
