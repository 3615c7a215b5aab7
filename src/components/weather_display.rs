use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{CitySelector, CitySelectorProps, Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::alert::AlertField;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main dashboard: city tabs, weather body and key hints
#[derive(Default)]
pub struct WeatherDisplay {
    selector: CitySelector,
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let selected: Vec<Action> = self
            .selector
            .handle_event(
                event,
                CitySelectorProps {
                    selected: props.state.city(),
                    loading: props.state.loading,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        if !selected.is_empty() {
            return selected;
        }

        let action = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('t') => Some(Action::AlertEditOpen(AlertField::Threshold)),
                KeyCode::Char('c') => Some(Action::AlertEditOpen(AlertField::Consecutive)),
                KeyCode::Char('x') => Some(Action::AlertLogClear),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        };
        action.into_iter().collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // City tabs
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.selector.render(
            frame,
            chunks[0],
            CitySelectorProps {
                selected: props.state.city(),
                loading: props.state.loading,
                is_focused: props.is_focused,
            },
        );

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("1-6", "city"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("t", "threshold"),
                    StatusBarHint::new("c", "streak"),
                    StatusBarHint::new("x", "clear alerts"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
