use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_header::HEADER_HEIGHT;
use super::{CityHeader, CityHeaderProps, Component};
use crate::action::Action;
use crate::conditions::Condition;
use crate::state::{TempUnit, WeatherSnapshot};

/// Header, temperature and observation time for the selected city
pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub unit: TempUnit,
}

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} | "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
    .centered()
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let snapshot = props.snapshot;
        let chunks = Layout::vertical([
            Constraint::Max(HEADER_HEIGHT),
            Constraint::Length(1), // condition
            Constraint::Length(1), // temperature
            Constraint::Length(1), // feels like
            Constraint::Length(1), // last updated
        ])
        .split(area);

        let mut header = CityHeader;
        header.render(
            frame,
            chunks[0],
            CityHeaderProps {
                city: snapshot.city,
                celsius: Some(snapshot.celsius()),
            },
        );

        let condition = Condition::from_label(&snapshot.condition);
        let condition_line = Line::from(vec![
            Span::raw(format!("{} ", condition.emoji())),
            Span::styled(
                snapshot.condition.clone(),
                Style::default().fg(Color::Green),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(condition_line), chunks[1]);

        let temperature = Line::from(Span::styled(
            props.unit.format(snapshot.temperature),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(temperature), chunks[2]);

        frame.render_widget(
            Paragraph::new(labelled("Feels Like", props.unit.format(snapshot.feels_like))),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new(labelled("Last Updated", snapshot.observed_label())),
            chunks[4],
        );
    }
}
