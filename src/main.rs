//! metrowatch - weather dashboard for Indian metro cities

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use metrowatch::action::Action;
use metrowatch::api::WeatherApi;
use metrowatch::components::alert_editor::EDITOR_SIZE;
use metrowatch::components::{
    AlertEditorOverlay, AlertEditorProps, Component, WeatherDisplay, WeatherDisplayProps,
};
use metrowatch::config::Cli;
use metrowatch::effect::Effect;
use metrowatch::error::ConfigError;
use metrowatch::logging;
use metrowatch::reducer::reducer;
use metrowatch::state::AppState;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};

const FETCH_TASK: &str = "weather";
const POLL_TIMER: &str = "poll_timer";
const ALERT_TIMER: &str = "alert_timer";

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
    Editor,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Editor,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.is_editing() {
            Some(WeatherComponentId::Editor)
        } else {
            Some(WeatherComponentId::Display)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        if self.is_editing() {
            Some(WeatherComponentId::Editor)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Display => WeatherContext::Main,
            WeatherComponentId::Editor => WeatherContext::Editor,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = logging::init(cli.log_file.clone()).map_err(config_error)?;
    let api_config = match cli.api_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let api = Arc::new(
        WeatherApi::new(api_config)
            .map_err(ConfigError::from)
            .map_err(config_error)?,
    );

    let city = cli.city;
    let alert_config = cli.alert_config();
    let intervals = cli.intervals();
    tracing::info!(
        %city,
        log = %log_path.display(),
        poll_ms = intervals.fetch_ms,
        alert_ms = intervals.alert_check_ms,
        "starting metrowatch"
    );

    let debug = DebugSession::new(cli.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let mut state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(city, alert_config, intervals))
        })
        .await
        .map_err(debug_error)?;

    // Timer periods always come from the command line
    state.intervals = intervals;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, api, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("metrowatch stopped");
    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
    editor: AlertEditorOverlay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::default(),
            editor: AlertEditorOverlay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.is_editing(),
        };
        self.display.render(frame, area, props);

        self.editor.set_open(state.is_editing());
        match &state.alert_editor {
            Some(editor) => {
                let (width, height) = EDITOR_SIZE;
                let editor_area = centered_rect(width, height, area);
                event_ctx.set_component_area(WeatherComponentId::Editor, editor_area);
                let props = AlertEditorProps {
                    editor,
                    is_focused: render_ctx.is_focused(),
                    on_change: Action::AlertEditChange,
                    on_submit: Action::AlertEditSubmit,
                };
                self.editor.render(frame, area, props);
            }
            None => {
                event_ctx
                    .component_areas
                    .remove(&WeatherComponentId::Editor);
            }
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_editor_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.editor.set_open(state.is_editing());
        let Some(editor) = &state.alert_editor else {
            return HandlerResponse::ignored();
        };
        let props = AlertEditorProps {
            editor,
            is_focused: true,
            on_change: Action::AlertEditChange,
            on_submit: Action::AlertEditSubmit,
        };
        let actions: Vec<_> = self.editor.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

fn config_error(error: ConfigError) -> io::Error {
    io::Error::other(error.to_string())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    api: Arc<WeatherApi>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_editor = Rc::clone(&ui);
    bus.register(WeatherComponentId::Editor, move |event, state| {
        ui_editor
            .borrow_mut()
            .handle_editor_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::SessionStart),
            Some(Action::Quit),
            // Polling is driven by per-session timer tasks, not subscriptions
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &api),
        )
        .await
}

/// Handle effects by spawning tasks.
///
/// Spawning under a key already in use replaces that task, so each schedule
/// effect leaves exactly one timer running.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, api: &Arc<WeatherApi>) {
    match effect {
        Effect::FetchWeather { city } => {
            let api = Arc::clone(api);
            ctx.tasks().spawn(FETCH_TASK, async move {
                match api.fetch_cycle(city).await {
                    Ok((snapshot, forecast)) => Action::WeatherDidLoad {
                        city,
                        snapshot,
                        forecast,
                    },
                    Err(e) => Action::WeatherDidError {
                        city,
                        error: e.error,
                        snapshot: e.snapshot,
                    },
                }
            });
        }
        Effect::SchedulePoll { session, after } => {
            ctx.tasks().spawn(POLL_TIMER, async move {
                tokio::time::sleep(after).await;
                Action::SessionPollDue(session)
            });
        }
        Effect::ScheduleAlertCheck { session, after } => {
            ctx.tasks().spawn(ALERT_TIMER, async move {
                tokio::time::sleep(after).await;
                Action::SessionAlertCheckDue(session)
            });
        }
    }
}
