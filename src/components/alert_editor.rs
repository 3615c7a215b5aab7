use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use crate::action::Action;
use crate::state::AlertEditor;

/// Modal editor for a single alert config value
pub struct AlertEditorOverlay {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct AlertEditorProps<'a> {
    pub editor: &'a AlertEditor,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

const INPUT_PLACEHOLDER: &str = "Enter a value...";

/// Width and height of the editor modal
pub const EDITOR_SIZE: (u16, u16) = (50, 9);

impl Default for AlertEditorOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl AlertEditorOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the input whenever the editor is reopened
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

impl Component<Action> for AlertEditorOverlay {
    type Props<'a> = AlertEditorProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::AlertEditClose],
            KeyCode::Enter => return vec![(props.on_submit)(props.editor.input.clone())],
            _ => {}
        }

        let input_props = TextInputProps {
            value: &props.editor.input,
            placeholder: INPUT_PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (width, height) = EDITOR_SIZE;
        if area.width < width / 2 || area.height < height {
            return;
        }

        let modal_area = centered_rect(width, height, area);
        let AlertEditorOverlay { input, modal, .. } = self;
        let editor = props.editor;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(1), // Error / hint
            ])
            .split(content_area);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    editor.field.label(),
                    Style::default().fg(Color::Cyan),
                ))),
                chunks[0],
            );

            // Input with lighter background
            let input_props = TextInputProps {
                value: &editor.input,
                placeholder: INPUT_PLACEHOLDER,
                is_focused: props.is_focused,
                style: TextInputStyle {
                    base: BaseStyle {
                        border: None,
                        padding: Padding::all(1),
                        bg: Some(Color::Rgb(50, 50, 60)),
                        fg: None,
                    },
                    placeholder_style: None,
                    cursor_style: None,
                },
                on_change: props.on_change,
                on_submit: props.on_submit,
                on_cursor_move: Some(|_| Action::Render),
            };
            input.render(frame, chunks[1], input_props);

            let footer = match &editor.error {
                Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
                None => Span::styled(
                    "Enter to apply, Esc to cancel",
                    Style::default().fg(Color::DarkGray),
                ),
            };
            frame.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::AlertEditClose,
                render_content: &mut render_content,
            },
        );
    }
}
