//! Session flows with EffectStoreTestHarness
//!
//! Timers and fetches are simulated by completing the actions their tasks
//! would emit.

use metrowatch::{
    action::Action,
    alert::{AlertConfig, AlertField},
    city::City,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    error::{FETCH_FAILED_MESSAGE, FetchError},
    reducer::reducer,
    state::{AppState, ForecastDay, TempUnit, WeatherSnapshot},
};
use tui_dispatch::NumericComponentId;
use tui_dispatch::testing::*;

fn mock_snapshot(city: City, kelvin: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        city,
        condition: "Clouds".into(),
        icon: "04d".into(),
        temperature: kelvin,
        temp_max: kelvin + 1.0,
        temp_min: kelvin - 1.0,
        feels_like: kelvin + 2.0,
        wind_speed: 4.1,
        pressure: 1004.0,
        humidity: 70.0,
        observed_at: 1_729_425_600,
    }
}

fn mock_forecast() -> Vec<ForecastDay> {
    (1..=7)
        .map(|d| ForecastDay {
            date: format!("2024-11-{d:02}"),
            condition: "Partly cloudy".into(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
            sunrise: "06:32 AM".into(),
            sunset: "06:01 PM".into(),
            avg_temp_c: 29.4,
            min_temp_c: 25.0,
            max_temp_c: 33.8,
        })
        .collect()
}

fn did_load(city: City, kelvin: f64) -> Action {
    Action::WeatherDidLoad {
        city,
        snapshot: mock_snapshot(city, kelvin),
        forecast: mock_forecast(),
    }
}

macro_rules! render_display {
    ($harness:expr) => {{
        let mut component = WeatherDisplay::default();
        $harness.render_plain(120, 40, |frame, area, state| {
            let props = WeatherDisplayProps {
                state,
                is_focused: true,
            };
            component.render(frame, area, props);
        })
    }};
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn test_session_start_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SessionStart);
    harness.assert_state(|s| s.loading && s.started);

    let effects = harness.drain_effects();
    effects.effects_count(3);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchWeather { city: City::Delhi }));

    harness.complete_action(did_load(City::Delhi, 303.15));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.snapshot.as_ref().map(|w| w.celsius()) == Some(30.0));
    harness.assert_state(|s| s.forecast.len() == 7);
}

#[test]
fn test_switch_city_discards_late_result() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);
    harness.drain_effects();

    harness.dispatch_collect(Action::CitySelect(City::Chennai));
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::FetchWeather { city: City::Chennai }));
    effects.effects_none_match(|e| matches!(e, Effect::FetchWeather { city: City::Delhi }));

    // Delhi's request was still in flight
    harness.complete_action(did_load(City::Delhi, 310.0));
    harness.complete_action(Action::SessionPollDue(1));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (0, 3));

    harness.assert_state(|s| s.city() == City::Chennai && s.snapshot.is_none() && s.loading);

    harness.complete_action(did_load(City::Chennai, 305.0));
    harness.process_emitted();
    harness.assert_state(|s| s.snapshot.as_ref().map(|w| w.city) == Some(City::Chennai));
}

#[test]
fn test_poll_timer_refetches_same_city() {
    let mut harness = EffectStoreTestHarness::new(
        AppState::new(City::Kolkata, AlertConfig::default(), Default::default()),
        reducer,
    );
    harness.dispatch_collect(Action::SessionStart);
    harness.drain_effects();

    harness.complete_action(did_load(City::Kolkata, 300.0));
    harness.complete_action(Action::SessionPollDue(1));
    harness.process_emitted();

    let effects = harness.drain_effects();
    effects.effects_count(2);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchWeather { city: City::Kolkata }));
    effects.effects_all_match(|e| {
        matches!(
            e,
            Effect::FetchWeather { .. } | Effect::SchedulePoll { session: 1, .. }
        )
    });
}

// ============================================================================
// Alerts
// ============================================================================

#[test]
fn test_hot_city_raises_one_alert_per_streak() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);

    // 36.00 °C against the default 35 °C / 2 checks
    harness.complete_action(did_load(City::Delhi, 309.15));
    for _ in 0..4 {
        harness.complete_action(Action::SessionAlertCheckDue(1));
    }
    harness.process_emitted();

    harness.assert_state(|s| s.alert_log.len() == 1);
    harness.assert_state(|s| {
        s.alert_log.messages()[0]
            == "Temperature in Delhi has exceeded the threshold of 35°C for 2 consecutive updates. Current temperature: 36.00°C"
    });
}

#[test]
fn test_cool_reading_resets_streak() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);

    harness.complete_action(did_load(City::Delhi, 309.15));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    harness.complete_action(did_load(City::Delhi, 307.15));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    harness.complete_action(did_load(City::Delhi, 309.15));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    harness.process_emitted();

    harness.assert_state(|s| s.alert_log.is_empty());
    harness.assert_state(|s| s.alert_counts.get(City::Delhi) == 1);
}

#[test]
fn test_alert_log_survives_city_switch() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);
    harness.complete_action(did_load(City::Delhi, 309.15));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    harness.complete_action(Action::SessionAlertCheckDue(1));
    harness.process_emitted();
    harness.assert_state(|s| s.alert_log.len() == 1);

    harness.dispatch_collect(Action::CitySelect(City::Hyderabad));

    harness.assert_state(|s| s.alert_log.len() == 1);
    harness.assert_state(|s| s.alert_counts.get(City::Delhi) == 0);
}

#[test]
fn test_edit_threshold_through_keys() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::default();

    let actions = harness.send_keys::<NumericComponentId, _, _>("t", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_first(Action::AlertEditOpen(AlertField::Threshold));

    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.is_editing());

    harness.dispatch_collect(Action::AlertEditSubmit("hot".into()));
    harness.assert_state(|s| {
        s.alert_editor
            .as_ref()
            .is_some_and(|e| e.error.is_some())
    });

    harness.dispatch_collect(Action::AlertEditSubmit("38.5".into()));
    harness.assert_state(|s| !s.is_editing());
    harness.assert_state(|s| s.alert_config.threshold_temp == 38.5);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_flow_keeps_data_hidden() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);
    harness.complete_action(did_load(City::Delhi, 300.0));
    harness.process_emitted();

    harness.complete_action(Action::WeatherDidError {
        city: City::Delhi,
        error: FetchError::Network("connection refused".into()),
        snapshot: None,
    });
    harness.process_emitted();

    harness.assert_state(|s| s.error.as_deref() == Some(FETCH_FAILED_MESSAGE));
    harness.assert_state(|s| s.snapshot.is_some());

    let output = render_display!(harness);
    assert!(output.contains(FETCH_FAILED_MESSAGE), "Error should show:\n{output}");
    assert!(!output.contains("Daily Weather Forecast"));

    // Next successful cycle brings the content back
    harness.complete_action(did_load(City::Delhi, 301.0));
    harness.process_emitted();
    let output = render_display!(harness);
    assert!(output.contains("Daily Weather Forecast"));
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_mumbai_end_to_end() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::default();
    harness.dispatch_collect(Action::SessionStart);
    harness.drain_effects();

    let actions = harness.send_keys::<NumericComponentId, _, _>("2", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.drain_effects();

    harness.complete_action(did_load(City::Mumbai, 309.15));
    harness.process_emitted();

    let output = render_display!(harness);
    assert!(output.contains("36.00 °C"), "Celsius reading:\n{output}");
    assert_eq!(
        output.lines().filter(|l| l.contains("2024-11-0")).count(),
        7,
        "One row per forecast day:\n{output}"
    );

    harness.dispatch_collect(Action::UiToggleUnits);
    harness.assert_state(|s| s.unit == TempUnit::Kelvin);
    let output = render_display!(harness);
    assert!(output.contains("309.15 K"), "Kelvin reading:\n{output}");
}

#[test]
fn test_multiple_async_completions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SessionStart);

    harness.complete_action(did_load(City::Delhi, 300.0));
    harness.complete_action(Action::UiToggleUnits);

    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 2);

    harness.assert_state(|s| s.snapshot.is_some());
    harness.assert_state(|s| s.unit == TempUnit::Kelvin);
}
