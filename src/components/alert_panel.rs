use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::alert::{AlertConfig, AlertField, AlertLog};

/// Alert thresholds and the most recent alert messages
pub struct AlertPanel;

pub struct AlertPanelProps<'a> {
    pub config: &'a AlertConfig,
    pub log: &'a AlertLog,
}

impl Component<Action> for AlertPanel {
    type Props<'a> = AlertPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{}: ", AlertField::Threshold.label()), label),
                Span::raw(props.config.threshold_temp.to_string()),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", AlertField::Consecutive.label()), label),
                Span::raw(props.config.consecutive_alerts.to_string()),
            ]),
            Line::default(),
        ];

        if props.log.is_empty() {
            lines.push(Line::from(Span::styled("No alerts triggered yet.", label)).centered());
        } else {
            lines.extend(props.log.messages().iter().map(|message| {
                Line::from(Span::styled(
                    format!("* {message}"),
                    Style::default().fg(Color::Rgb(255, 120, 80)),
                ))
            }));
        }

        let block = Block::default().borders(Borders::ALL).title(" Alerts ");
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
