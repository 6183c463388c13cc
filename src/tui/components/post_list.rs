//! # PostList Component
//!
//! The paginated list screen: header, post previews, pager.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostListState` lives in `TuiState` (selection and scroll offset)
//! - `PostList` is created each frame with borrowed state and props
//!
//! ```text
//! ┌ Blog Posts ─────────────────────── [c] Create New Post ┐
//! │ ▌ First post                                           │
//! │ ▌ Lorem ipsum dolor sit amet...                        │
//! │                                                        │
//! │   Second post                                          │
//! │   ...                                                  │
//! │          ← Previous   Page 1 of 3   Next →             │
//! └────────────────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::pagination::PaginatedList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::pager::Pager;
use crate::tui::components::title_bar::spinner;
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No posts yet. Be the first to create one!";

/// Persistent state for the list screen.
#[derive(Debug, Default)]
pub struct PostListState {
    pub list_state: ListState,
}

impl PostListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jumps back to the first post.
    pub fn scroll_to_top(&mut self) {
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }

    /// Index of the selected post, clamped to `len`.
    pub fn selected_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(len - 1))
    }
}

impl EventHandler for PostListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.list_state.select_previous(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.list_state.select_next(),
            TuiEvent::Home => self.list_state.select_first(),
            TuiEvent::End => self.list_state.select_last(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the list screen.
pub struct PostList<'a> {
    list: &'a PaginatedList,
    state: &'a mut PostListState,
    spinner_frame: usize,
}

impl<'a> PostList<'a> {
    pub fn new(list: &'a PaginatedList, state: &'a mut PostListState, spinner_frame: usize) -> Self {
        Self {
            list,
            state,
            spinner_frame,
        }
    }

    fn post_item(title: &str, excerpt: &str, width: u16) -> ListItem<'static> {
        let mut lines = vec![Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        let options = textwrap::Options::new(width.max(1) as usize)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        lines.extend(
            textwrap::wrap(excerpt, options)
                .into_iter()
                .map(|line| Line::from(Span::styled(line.into_owned(), Style::default().fg(Color::Gray)))),
        );
        lines.push(Line::default());
        ListItem::new(Text::from(lines))
    }
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(" Blog Posts ").style(Style::default().add_modifier(Modifier::BOLD)))
            .title(
                Line::from(Span::styled(
                    " [c] Create New Post ",
                    Style::default().fg(Color::Blue),
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.list.is_loading() {
            let text = format!("{} Loading posts...", spinner(self.spinner_frame));
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(ratatui::layout::Flex::Center)
                .areas(inner);
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
            return;
        }

        let pager_height = if self.list.pagination().is_some() { 1 } else { 0 };
        let [posts_area, pager_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(pager_height)]).areas(inner);

        let posts = self.list.posts();
        if posts.is_empty() {
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(ratatui::layout::Flex::Center)
                .areas(posts_area);
            frame.render_widget(
                Paragraph::new(EMPTY_MESSAGE)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                middle,
            );
        } else {
            // Two columns go to the highlight symbol
            let text_width = posts_area.width.saturating_sub(2);
            let items: Vec<ListItem> = posts
                .iter()
                .map(|post| Self::post_item(&post.title, &post.excerpt(), text_width))
                .collect();

            if self.state.list_state.selected().is_none() {
                self.state.list_state.select(Some(0));
            }
            let list = List::new(items)
                .highlight_symbol("▌ ")
                .highlight_style(Style::default().fg(Color::Cyan));
            frame.render_stateful_widget(list, posts_area, &mut self.state.list_state);
        }

        if let Some(pagination) = self.list.pagination() {
            Pager::new(*pagination).render(frame, pager_area);
        }
    }
}
