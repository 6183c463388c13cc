//! # Pager Component
//!
//! `← Previous   Page 2 of 5   Next →`
//!
//! Stateless: the buttons are enabled exactly when the server's `has_prev` /
//! `has_next` flags say so. Disabled buttons are dimmed, never hidden, so the
//! layout does not jump between pages.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::PaginationInfo;
use crate::tui::component::Component;

pub struct Pager {
    pub pagination: PaginationInfo,
}

impl Pager {
    pub fn new(pagination: PaginationInfo) -> Self {
        Self { pagination }
    }

    fn button(label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Self::button(" ← Previous ", self.pagination.has_prev),
            Span::raw("   "),
            Span::styled(
                format!(
                    "Page {} of {}",
                    self.pagination.current_page, self.pagination.total_pages
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Self::button(" Next → ", self.pagination.has_next),
        ])
    }
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
