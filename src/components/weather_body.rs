use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_header::HEADER_HEIGHT;
use super::forecast_table::table_height;
use super::{
    AlertPanel, AlertPanelProps, CityHeader, CityHeaderProps, Component, CurrentConditions,
    CurrentConditionsProps, ERROR_ICON, ForecastTable, ForecastTableProps, WeatherSummary,
    WeatherSummaryProps,
};
use crate::action::Action;
use crate::state::{AppState, WeatherSnapshot};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Rows used by the current-conditions column below the header
const CONDITIONS_ROWS: u16 = 4;

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(snapshot) => render_ready(frame, area, props.state, snapshot),
            WeatherView::Loading => render_placeholder(frame, area, props.state, "Loading data..."),
            WeatherView::Idle => render_placeholder_hint(frame, area, props.state),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &WeatherSnapshot) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT + CONDITIONS_ROWS),
        Constraint::Length(table_height(state.forecast.len())),
        Constraint::Min(3),
    ])
    .split(area);

    let top = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    CurrentConditions.render(
        frame,
        top[0],
        CurrentConditionsProps {
            snapshot,
            unit: state.unit,
        },
    );
    AlertPanel.render(
        frame,
        top[1],
        AlertPanelProps {
            config: &state.alert_config,
            log: &state.alert_log,
        },
    );
    ForecastTable.render(
        frame,
        chunks[1],
        ForecastTableProps {
            days: &state.forecast,
        },
    );
    WeatherSummary.render(frame, chunks[2], WeatherSummaryProps { snapshot });
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area);

    CityHeader.render(
        frame,
        chunks[0],
        CityHeaderProps {
            city: state.city(),
            celsius: None,
        },
    );

    let msg = Line::from(vec![Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[2]);
}

fn render_placeholder_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area);

    CityHeader.render(
        frame,
        chunks[0],
        CityHeaderProps {
            city: state.city(),
            celsius: None,
        },
    );

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[2]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    let hint = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Retrying automatically. Press ", hint),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry now", hint),
            ])
            .centered(),
        ),
        chunks[5],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    /// Last cycle failed: weather content is hidden but kept in state
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Idle,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match (&state.error, &state.snapshot) {
            (Some(error), _) => WeatherView::Error(error),
            (None, Some(snapshot)) => WeatherView::Ready(snapshot),
            (None, None) if state.loading => WeatherView::Loading,
            (None, None) => WeatherView::Idle,
        }
    }
}
