//! 404 screen for missing posts and unknown locations.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct NotFound {
    pub message: &'static str,
}

impl NotFound {
    pub fn post() -> Self {
        Self {
            message: "Oops! This post doesn't exist.",
        }
    }

    pub fn page() -> Self {
        Self {
            message: "Oops! Nothing lives at this location.",
        }
    }
}

impl Component for NotFound {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "404",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.message),
            Line::default(),
            Line::from(Span::styled(
                "← Back to Posts (Esc)",
                Style::default().fg(Color::Blue),
            )),
        ];
        let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }
}
