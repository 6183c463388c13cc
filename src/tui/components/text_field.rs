//! # TextField Component
//!
//! A bordered, wrapping text field used by the create form.
//!
//! The field wraps its own text with `textwrap` instead of letting
//! `Paragraph` do it, so the lines on screen and the cursor position are
//! computed from the same wrap.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Border consumed on each axis by the bordered block
const BORDER: u16 = 1;

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wraps `text` into display lines. A trailing newline yields a trailing empty
/// line, which `textwrap` does not always produce by itself.
fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    lines
}

/// Byte offset in `text` where each wrapped line begins. Lines are found in
/// order; the spaces and newlines the wrap dropped sit between them.
fn line_starts(text: &str, lines: &[String]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(lines.len());
    let mut search = 0;
    for line in lines {
        if text[search..].starts_with('\n') {
            search += 1;
        }
        match text[search..].find(line.as_str()) {
            Some(offset) => {
                starts.push(search + offset);
                search += offset + line.len();
            }
            None => starts.push(search),
        }
    }
    starts
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Changed,
    /// Enter in a single-line field
    Confirm,
}

pub struct TextField {
    pub label: &'static str,
    pub buffer: String,
    /// Newlines are inserted on Enter instead of confirming
    pub multiline: bool,
    /// Byte offset of the cursor in `buffer`
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str, multiline: bool) -> Self {
        Self {
            label,
            buffer: String::new(),
            multiline,
            cursor: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        let text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    /// (wrapped line, display column) of the cursor for a given inner width.
    /// Measured against the wrap of the whole buffer, the same one `render`
    /// draws, so a word pushed to the next line takes the cursor with it.
    pub fn cursor_position(&self, width: u16) -> (u16, u16) {
        let lines = wrap_lines(&self.buffer, width);
        let starts = line_starts(&self.buffer, &lines);
        let row = starts
            .iter()
            .rposition(|&start| start <= self.cursor)
            .unwrap_or(0);
        let start = starts.get(row).copied().unwrap_or(0);
        let col = self.buffer[start..self.cursor].width() as u16;
        (row as u16, col.min(width.saturating_sub(1)))
    }

    /// Renders the field; places the terminal cursor when `focused`.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let inner_width = area.width.saturating_sub(BORDER * 2);
        let inner_height = area.height.saturating_sub(BORDER * 2);

        let lines = wrap_lines(&self.buffer, inner_width);
        let (cursor_row, cursor_col) = self.cursor_position(inner_width);
        let scroll = (cursor_row + 1).saturating_sub(inner_height);

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label)
            .title_style(border_style.add_modifier(Modifier::BOLD));

        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(text).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        if focused && inner_width > 0 && inner_height > 0 {
            frame.set_cursor_position((
                area.x + BORDER + cursor_col,
                area.y + BORDER + cursor_row - scroll,
            ));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Enter => {
                if self.multiline {
                    self.insert_str("\n");
                    Some(FieldEvent::Changed)
                } else {
                    Some(FieldEvent::Confirm)
                }
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
