//! # CreateForm Component
//!
//! The new-post form: a title field, a content field, and a submit button.
//!
//! ## State Management
//!
//! Field contents are internal state (the core never sees half-typed text).
//! Whether a submission is in flight is a prop from `CreateFlow`.
//!
//! Keys: Tab / Shift+Tab switch fields, Enter in the title moves to the
//! content, Ctrl+S submits.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::NewPost;
use crate::tui::component::EventHandler;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(NewPost),
}

pub struct CreateForm {
    pub title: TextField,
    pub content: TextField,
    pub focus: FormField,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateForm {
    pub fn new() -> Self {
        Self {
            title: TextField::new("Title", false),
            content: TextField::new("Content", true),
            focus: FormField::Title,
        }
    }

    /// Empties both fields and focuses the title.
    pub fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.focus = FormField::Title;
    }

    pub fn draft(&self) -> NewPost {
        NewPost::new(self.title.buffer.clone(), self.content.buffer.clone())
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Title,
        };
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, submitting: bool) {
        use Constraint::{Length, Min};
        let layout = Layout::vertical([Length(1), Length(1), Length(3), Min(3), Length(1)]);
        let [back_area, heading_area, title_area, content_area, button_area] =
            layout.areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "← Back to Posts (Esc)",
                Style::default().fg(Color::Blue),
            )),
            back_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Create New Post",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );

        self.title
            .render(frame, title_area, self.focus == FormField::Title);
        self.content
            .render(frame, content_area, self.focus == FormField::Content);

        let button = if submitting {
            Line::from(Span::styled(
                "[ Publishing... ]",
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.draft().is_complete() {
            Line::from(vec![
                Span::styled(
                    "[ Create Post ]",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Ctrl+S", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled("[ Create Post ]", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    " title and content required",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(button), button_area);
    }
}

impl EventHandler for CreateForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SubmitForm => Some(FormEvent::Submit(self.draft())),
            TuiEvent::Tab | TuiEvent::BackTab => {
                self.toggle_focus();
                None
            }
            _ => {
                if let Some(FieldEvent::Confirm) = self.focused_field().handle_event(event) {
                    self.focus = FormField::Content;
                }
                None
            }
        }
    }
}
