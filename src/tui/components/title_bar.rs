//! # TitleBar Component
//!
//! Top status bar: app name, the current navigable location, and a status
//! message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let loading_frame = app.is_loading().then_some(spinner_frame);
//! let mut title_bar = TitleBar::new(app.location().to_string(), status, loading_frame);
//! title_bar.render(frame, area);
//! ```
//!
//! Showing the location here is what makes it bookmarkable: what you see is
//! what `--location` accepts.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Quire | /?page=2 | ⠋"` plus any status
//! 2. **Status message**: `"Quire | /?page=2 | Could not load posts"`
//! 3. **Default**: `"Quire | /?page=2"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn spinner(frame_index: usize) -> &'static str {
    SPINNER[frame_index % SPINNER.len()]
}

/// Top status bar component showing the location and status.
pub struct TitleBar {
    /// Current navigable location (e.g. "/?page=2")
    pub location: String,
    /// Status message (e.g. "Could not load posts")
    pub status_message: String,
    /// Spinner frame while a request is in flight
    pub loading_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(location: String, status_message: String, loading_frame: Option<usize>) -> Self {
        Self {
            location,
            status_message,
            loading_frame,
        }
    }

    pub fn text(&self) -> String {
        let mut text = format!("Quire | {}", self.location);
        if let Some(frame_index) = self.loading_frame {
            text.push_str(" | ");
            text.push_str(spinner(frame_index));
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line. A plain `Span` is enough; the
    /// bar is always one row with no borders.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("/?page=2".to_string(), String::new(), None);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Quire | /?page=2"));
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "/".to_string(),
            "Could not load posts".to_string(),
            None,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Could not load posts"));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let title_bar = TitleBar::new("/post/3".to_string(), String::new(), Some(1));
        assert_eq!(title_bar.text(), "Quire | /post/3 | ⠙");
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER.len()));
    }
}
