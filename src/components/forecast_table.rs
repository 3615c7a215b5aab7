use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::ForecastDay;

/// One row per forecast day
pub struct ForecastTable;

pub struct ForecastTableProps<'a> {
    pub days: &'a [ForecastDay],
}

/// Rows needed to show `days` inside the bordered block
pub fn table_height(days: usize) -> u16 {
    days.max(1) as u16 + 2
}

fn row(day: &ForecastDay) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled(format!("{:<11}", day.date), Style::default().fg(Color::Cyan)),
        Span::raw(format!("{:<22.22}", day.condition)),
        Span::styled("\u{2191} ", dim),
        Span::raw(format!("{:<10}", day.sunrise)),
        Span::styled("\u{2193} ", dim),
        Span::raw(format!("{:<10}", day.sunset)),
        Span::styled("avg ", dim),
        Span::raw(format!("{:>5.1} °C  ", day.avg_temp_c)),
        Span::styled("min ", dim),
        Span::raw(format!("{:>5.1} °C  ", day.min_temp_c)),
        Span::styled("max ", dim),
        Span::raw(format!("{:>5.1} °C", day.max_temp_c)),
    ])
}

impl Component<Action> for ForecastTable {
    type Props<'a> = ForecastTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines: Vec<Line> = if props.days.is_empty() {
            vec![Line::from(Span::styled(
                "No forecast available",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            props.days.iter().map(row).collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Daily Weather Forecast ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
