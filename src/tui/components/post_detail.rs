//! # PostDetail Component
//!
//! Single-post screen. Three faces, one per load state:
//! - loading: a spinner
//! - not found: the 404 screen with a way back
//! - ready: back link, title, and the full content in a scroll view
//!
//! The content height comes from `Paragraph::line_count`, so the scroll view's
//! canvas is exactly as tall as the wrapped text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::detail::PostView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::not_found::NotFound;
use crate::tui::components::title_bar::spinner;
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct PostDetailState {
    pub scroll_state: ScrollViewState,
}

impl PostDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for PostDetailState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

pub struct PostDetail<'a> {
    view: &'a PostView,
    state: &'a mut PostDetailState,
    spinner_frame: usize,
}

impl<'a> PostDetail<'a> {
    pub fn new(view: &'a PostView, state: &'a mut PostDetailState, spinner_frame: usize) -> Self {
        Self {
            view,
            state,
            spinner_frame,
        }
    }
}

impl Component for PostDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.view.is_not_found() {
            NotFound::post().render(frame, area);
            return;
        }

        let Some(post) = self.view.post() else {
            let text = format!("{} Loading...", spinner(self.spinner_frame));
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(ratatui::layout::Flex::Center)
                .areas(area);
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
            return;
        };

        use Constraint::{Length, Min};
        let [back_area, title_area, body_area] =
            Layout::vertical([Length(2), Length(2), Min(0)]).areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "← Back to Posts (Esc)",
                Style::default().fg(Color::Blue),
            )),
            back_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                post.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .wrap(Wrap { trim: true }),
            title_area,
        );

        // One column for the scrollbar
        let content_width = body_area.width.saturating_sub(1);
        let body = Paragraph::new(post.content.as_str()).wrap(Wrap { trim: false });
        let height = body.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(body, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }
}
