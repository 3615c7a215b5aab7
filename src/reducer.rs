//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::alert;
use crate::city::City;
use crate::effect::Effect;
use crate::state::{AlertEditor, AppState, TempUnit};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City / session actions =====
        Action::CitySelect(city) => {
            if state.started && city == state.city() {
                return DispatchResult::unchanged();
            }
            start_session(state, city)
        }

        Action::SessionStart => {
            if state.started {
                return resume_session(state);
            }
            start_session(state, state.city())
        }

        Action::SessionPollDue(id) => {
            if !is_current_session(state, id) {
                return DispatchResult::unchanged();
            }
            state.loading = true;
            DispatchResult::changed_with_many(vec![
                Effect::FetchWeather { city: state.city() },
                Effect::SchedulePoll {
                    session: id,
                    after: state.intervals.fetch(),
                },
            ])
        }

        Action::SessionAlertCheckDue(id) => {
            if !is_current_session(state, id) {
                return DispatchResult::unchanged();
            }
            // Evaluates whatever reading was fetched last, even if an earlier
            // check already saw it.
            if let Some(celsius) = state.snapshot.as_ref().map(|s| s.celsius()) {
                let city = state.city();
                let message =
                    alert::evaluate(&state.alert_config, &mut state.alert_counts, city, celsius);
                if let Some(message) = message {
                    tracing::info!(%city, celsius, "temperature alert");
                    state.alert_log.push(message);
                }
            }
            DispatchResult::changed_with(Effect::ScheduleAlertCheck {
                session: id,
                after: state.intervals.alert_check(),
            })
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            if !state.started {
                return start_session(state, state.city());
            }
            state.loading = true;
            DispatchResult::changed_with(Effect::FetchWeather { city: state.city() })
        }

        Action::WeatherDidLoad {
            city,
            snapshot,
            forecast,
        } => {
            if is_stale(state, city) {
                return DispatchResult::unchanged();
            }
            state.snapshot = Some(snapshot);
            state.forecast = forecast;
            state.error = None;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            city,
            error,
            snapshot,
        } => {
            if is_stale(state, city) {
                return DispatchResult::unchanged();
            }
            tracing::warn!(%city, %error, partial = snapshot.is_some(), "fetch cycle failed");
            // Current conditions that did arrive replace the old snapshot;
            // the previous forecast stays.
            if let Some(snapshot) = snapshot {
                state.snapshot = Some(snapshot);
            }
            state.error = Some(error.user_message().to_string());
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Alert actions =====
        Action::AlertEditOpen(field) => {
            state.alert_editor = Some(AlertEditor {
                field,
                input: field.current(&state.alert_config),
                error: None,
            });
            DispatchResult::changed()
        }

        Action::AlertEditClose => {
            if state.alert_editor.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::AlertEditChange(input) => match state.alert_editor.as_mut() {
            Some(editor) => {
                editor.input = input;
                editor.error = None;
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::AlertEditSubmit(input) => {
            let Some(editor) = state.alert_editor.as_mut() else {
                return DispatchResult::unchanged();
            };
            match editor.field.apply(&state.alert_config, &input) {
                Ok(config) => {
                    tracing::info!(
                        threshold = config.threshold_temp,
                        consecutive = config.consecutive_alerts,
                        "alert config updated"
                    );
                    state.alert_config = config;
                    state.alert_editor = None;
                }
                Err(message) => {
                    editor.input = input;
                    editor.error = Some(message);
                }
            }
            DispatchResult::changed()
        }

        Action::AlertLogClear => {
            if state.alert_log.is_empty() {
                return DispatchResult::unchanged();
            }
            state.alert_log.clear();
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Tear down the current session and start polling `city`.
///
/// The schedule effects replace both timers, so nothing from the previous
/// session keeps running.
fn start_session(state: &mut AppState, city: City) -> DispatchResult<Effect> {
    state.session = state.session.succeed(city);
    state.started = true;
    state.snapshot = None;
    state.forecast.clear();
    state.error = None;
    state.loading = true;
    state.unit = TempUnit::default();
    state.alert_counts.clear();

    let session = state.session.id;
    tracing::info!(%city, session, "polling session started");
    DispatchResult::changed_with_many(session_effects(state, city))
}

/// Restart fetching and both timers for a session restored from a snapshot.
///
/// Loaded data stays on screen until the first fetch replaces it.
fn resume_session(state: &mut AppState) -> DispatchResult<Effect> {
    let city = state.city();
    let session = state.session.id;
    state.loading = true;

    tracing::info!(%city, session, "polling session resumed");
    DispatchResult::changed_with_many(session_effects(state, city))
}

fn session_effects(state: &AppState, city: City) -> Vec<Effect> {
    let session = state.session.id;
    vec![
        Effect::FetchWeather { city },
        Effect::SchedulePoll {
            session,
            after: state.intervals.fetch(),
        },
        Effect::ScheduleAlertCheck {
            session,
            after: state.intervals.alert_check(),
        },
    ]
}

fn is_current_session(state: &AppState, id: u64) -> bool {
    let current = state.started && state.session.id == id;
    if !current {
        tracing::debug!(
            stale = id,
            current = state.session.id,
            "ignoring timer from old session"
        );
    }
    current
}

fn is_stale(state: &AppState, city: City) -> bool {
    let stale = city != state.city();
    if stale {
        tracing::debug!(%city, selected = %state.city(), "discarding result for deselected city");
    }
    stale
}
