use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;
use crate::city::City;

/// Numbered tabs for the fixed city list
#[derive(Default)]
pub struct CitySelector;

pub struct CitySelectorProps {
    pub selected: City,
    pub loading: bool,
    pub is_focused: bool,
}

impl CitySelector {
    fn tab_line(selected: City, loading: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(City::ALL.len() * 2 + 1);
        for city in City::ALL {
            let label = format!(" {} {} ", city.index() + 1, city.name());
            let style = if city == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        if loading {
            spans.push(Span::styled(
                "\u{27f3} updating",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component<Action> for CitySelector {
    type Props<'a> = CitySelectorProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        let city = match key.code {
            KeyCode::Char(c @ '1'..='9') => match City::from_index(c as usize - '1' as usize) {
                Some(city) => city,
                None => return None,
            },
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => props.selected.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => props.selected.next(),
            _ => return None,
        };
        Some(Action::CitySelect(city))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(
            Paragraph::new(Self::tab_line(props.selected, props.loading)),
            area,
        );
    }
}
