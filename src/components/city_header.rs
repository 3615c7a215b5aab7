use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};

use super::Component;
use crate::action::Action;
use crate::city::City;

/// FIGlet city name, tinted by the current temperature
pub struct CityHeader;

pub struct CityHeaderProps {
    pub city: City,
    /// Latest reading in Celsius, if any
    pub celsius: Option<f64>,
}

/// Rows the tallest header font needs
pub const HEADER_HEIGHT: u16 = 6;

const GRADIENT_ANGLE: f32 = 5.0;

pub fn gradient_colors(celsius: Option<f64>) -> (ArtColor, ArtColor) {
    match celsius {
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (start, end) = gradient_colors(props.celsius);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::new(
                GRADIENT_ANGLE,
                vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
            )));

        frame.render_widget(ArtBox::new(&renderer, props.city.name()), area);
    }
}
