//! Temperature threshold alerting
//!
//! Each city moves between two states: below the threshold, or breaching it
//! for `n` consecutive readings. A reading above the threshold advances the
//! streak; any reading at or below it resets the streak to zero. When a
//! streak reaches the configured length, one message is produced.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::city::City;

/// Maximum number of messages kept in the alert log
pub const ALERT_LOG_CAPACITY: usize = 5;

/// User-editable alert thresholds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlertConfig {
    /// Celsius
    pub threshold_temp: f64,
    /// Streak length that triggers an alert; never below 1
    pub consecutive_alerts: u32,
}

impl AlertConfig {
    pub fn new(threshold_temp: f64, consecutive_alerts: u32) -> Self {
        Self {
            threshold_temp,
            consecutive_alerts: consecutive_alerts.max(1),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::new(35.0, 2)
    }
}

/// Which config field the editor is changing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AlertField {
    #[default]
    Threshold,
    Consecutive,
}

impl AlertField {
    pub fn label(self) -> &'static str {
        match self {
            AlertField::Threshold => "Threshold Temperature (°C)",
            AlertField::Consecutive => "Consecutive Alerts",
        }
    }

    /// Current value of this field, as the editor's initial text
    pub fn current(self, config: &AlertConfig) -> String {
        match self {
            AlertField::Threshold => config.threshold_temp.to_string(),
            AlertField::Consecutive => config.consecutive_alerts.to_string(),
        }
    }

    /// Parse `input` and return `config` with this field replaced.
    pub fn apply(self, config: &AlertConfig, input: &str) -> Result<AlertConfig, String> {
        let input = input.trim();
        match self {
            AlertField::Threshold => match input.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Ok(AlertConfig::new(value, config.consecutive_alerts))
                }
                _ => Err(format!("'{input}' is not a temperature")),
            },
            AlertField::Consecutive => match input.parse::<u32>() {
                Ok(value) if value >= 1 => Ok(AlertConfig::new(config.threshold_temp, value)),
                _ => Err(format!("'{input}' is not a whole number of at least 1")),
            },
        }
    }
}

/// Consecutive-breach counter per city
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlertCounts(HashMap<City, u32>);

impl AlertCounts {
    pub fn get(&self, city: City) -> u32 {
        self.0.get(&city).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn breach(&mut self, city: City) -> u32 {
        let count = self.0.entry(city).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    fn reset(&mut self, city: City) {
        self.0.insert(city, 0);
    }
}

/// Most-recent-first alert messages, capped at [`ALERT_LOG_CAPACITY`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlertLog(Vec<String>);

impl AlertLog {
    pub fn push(&mut self, message: String) {
        self.0.insert(0, message);
        self.0.truncate(ALERT_LOG_CAPACITY);
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Feed one Celsius reading for `city` into the breach counters.
///
/// Returns the alert message when this reading completes a streak of exactly
/// `config.consecutive_alerts` breaches. Longer streaks stay silent until the
/// counter is reset by a reading at or below the threshold.
pub fn evaluate(
    config: &AlertConfig,
    counts: &mut AlertCounts,
    city: City,
    celsius: f64,
) -> Option<String> {
    if celsius <= config.threshold_temp {
        counts.reset(city);
        return None;
    }

    let streak = counts.breach(city);
    if streak == config.consecutive_alerts.max(1) {
        Some(alert_message(city, config.threshold_temp, streak, celsius))
    } else {
        None
    }
}

pub fn alert_message(city: City, threshold: f64, streak: u32, celsius: f64) -> String {
    format!(
        "Temperature in {city} has exceeded the threshold of {threshold}°C for {streak} consecutive updates. Current temperature: {celsius:.2}°C"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(readings: &[f64], config: &AlertConfig) -> (Vec<Option<String>>, AlertCounts) {
        let mut counts = AlertCounts::default();
        let out = readings
            .iter()
            .map(|t| evaluate(config, &mut counts, City::Delhi, *t))
            .collect();
        (out, counts)
    }

    #[test]
    fn test_two_breaches_alert_once() {
        let (out, counts) = run(&[36.0, 36.0], &AlertConfig::default());
        assert!(out[0].is_none());
        assert_eq!(
            out[1].as_deref(),
            Some(
                "Temperature in Delhi has exceeded the threshold of 35°C for 2 consecutive updates. Current temperature: 36.00°C"
            )
        );
        assert_eq!(counts.get(City::Delhi), 2);
    }

    #[test]
    fn test_reading_at_threshold_resets_streak() {
        let (out, counts) = run(&[36.0, 34.0, 36.0, 36.0], &AlertConfig::default());
        assert_eq!(out.iter().filter(|m| m.is_some()).count(), 1);
        assert!(out[2].is_none());
        assert!(out[3].is_some());
        assert_eq!(counts.get(City::Delhi), 2);

        let (out, counts) = run(&[36.0, 35.0], &AlertConfig::default());
        assert!(out.iter().all(Option::is_none));
        assert_eq!(counts.get(City::Delhi), 0);
    }

    #[test]
    fn test_long_streak_alerts_only_on_reaching_count() {
        let (out, _) = run(&[40.0, 40.0, 40.0, 40.0], &AlertConfig::default());
        let fired: Vec<usize> = out
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|_| i))
            .collect();
        assert_eq!(fired, vec![1]);
    }

    #[test]
    fn test_single_reading_streak() {
        let (out, _) = run(&[36.0], &AlertConfig::new(35.0, 1));
        assert!(out[0].is_some());
    }

    #[test]
    fn test_counts_are_per_city() {
        let config = AlertConfig::default();
        let mut counts = AlertCounts::default();
        evaluate(&config, &mut counts, City::Delhi, 36.0);
        evaluate(&config, &mut counts, City::Mumbai, 30.0);
        assert_eq!(counts.get(City::Delhi), 1);
        assert_eq!(counts.get(City::Mumbai), 0);
    }

    #[test]
    fn test_log_is_bounded_and_newest_first() {
        let mut log = AlertLog::default();
        for i in 0..8 {
            log.push(format!("alert {i}"));
            assert!(log.len() <= ALERT_LOG_CAPACITY);
        }
        assert_eq!(
            log.messages(),
            &["alert 7", "alert 6", "alert 5", "alert 4", "alert 3"]
        );
    }

    #[test]
    fn test_config_clamps_streak_to_one() {
        assert_eq!(AlertConfig::new(30.0, 0).consecutive_alerts, 1);
    }

    #[test]
    fn test_field_apply() {
        let config = AlertConfig::default();
        assert_eq!(
            AlertField::Threshold.apply(&config, " 40.5 "),
            Ok(AlertConfig::new(40.5, 2))
        );
        assert_eq!(
            AlertField::Consecutive.apply(&config, "3"),
            Ok(AlertConfig::new(35.0, 3))
        );
        assert!(AlertField::Consecutive.apply(&config, "0").is_err());
        assert!(AlertField::Threshold.apply(&config, "hot").is_err());
        assert!(AlertField::Threshold.apply(&config, "NaN").is_err());
    }
}
