use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::conditions::Condition;
use crate::state::{WeatherSnapshot, kelvin_to_celsius};

/// Advisory text for the current condition plus the day's key figures
pub struct WeatherSummary;

pub struct WeatherSummaryProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

fn stat(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
        Span::raw("   "),
    ]
}

impl Component<Action> for WeatherSummary {
    type Props<'a> = WeatherSummaryProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Weather Summary ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let condition = Condition::from_label(&props.snapshot.condition);
        frame.render_widget(
            Paragraph::new(condition.summary())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let s = props.snapshot;
        let stats: Vec<Span> = [
            stat("Max Temp", format!("{:.2}°C", kelvin_to_celsius(s.temp_max))),
            stat("Min Temp", format!("{:.2}°C", kelvin_to_celsius(s.temp_min))),
            stat("Wind Speed", format!("{}m/s", s.wind_speed)),
            stat("Humidity", format!("{}%", s.humidity)),
            stat("Air Pressure", format!("{}hPa", s.pressure)),
        ]
        .into_iter()
        .flatten()
        .collect();
        frame.render_widget(Paragraph::new(Line::from(stats).centered()), chunks[1]);
    }
}
