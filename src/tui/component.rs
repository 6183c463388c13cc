use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a rectangle of the frame.
///
/// Screens are built per frame from borrowed props (`&PaginatedList`,
/// `&PostView`) plus a `&mut` handle on their persistent state, so `render`
/// takes `&mut self`: drawing a `List` or `ScrollView` updates its offset.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to terminal events.
///
/// Local effects (moving a selection, typing a character) happen in place.
/// Anything the core must hear about comes back as `Self::Event`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
