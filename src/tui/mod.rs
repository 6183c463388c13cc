//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never sees a key code; it sees `Action::NextPage`.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (a request in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, responses, or
//!   terminal resize.
//!
//! ## Window Title
//!
//! The terminal title tracks `core::title::window_title` and is only rewritten
//! when it changes.

mod component;
pub mod components;
pub mod event;
pub mod tasks;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::api::{ApiError, BlogApi, HttpBlogApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::location::{Location, Route};
use crate::core::state::{App, SiteInfo};
use crate::core::title::window_title;
use crate::tui::component::EventHandler;
use crate::tui::components::create_form::FormEvent;
use crate::tui::components::{CreateForm, PostDetailState, PostListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub post_list: PostListState,
    pub post_detail: PostDetailState,
    pub form: CreateForm,
    // Route the component states were last prepared for
    last_route: Option<Route>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            post_list: PostListState::new(),
            post_detail: PostDetailState::new(),
            form: CreateForm::new(),
            last_route: None,
        }
    }

    /// Prepares component state for a screen that was just entered.
    /// Entering the create screen starts a blank form; entering a post
    /// starts at its top.
    pub fn sync_route(&mut self, route: Route) {
        if self.last_route == Some(route) {
            return;
        }
        match route {
            Route::Create => self.form.reset(),
            Route::Post { .. } => self.post_detail.scroll_to_top(),
            Route::List | Route::Unknown => {}
        }
        self.last_route = Some(route);
    }
}

/// Turns a terminal event into an action for the screen on display.
/// Events that only move local state (selection, scrolling, typing) are
/// consumed here and yield `None`.
pub fn map_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    match app.route {
        Route::List => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Enter => {
                let posts = app.list.posts();
                tui.post_list
                    .selected_index(posts.len())
                    .map(|index| Action::OpenPost(posts[index].id))
            }
            TuiEvent::CursorLeft | TuiEvent::InputChar('p') => Some(Action::PrevPage),
            TuiEvent::CursorRight | TuiEvent::InputChar('n') => Some(Action::NextPage),
            TuiEvent::InputChar('c') => Some(Action::OpenCreate),
            TuiEvent::InputChar('r') => Some(Action::Refresh),
            TuiEvent::HistoryBack | TuiEvent::Backspace => Some(Action::HistoryBack),
            TuiEvent::HistoryForward | TuiEvent::InputChar('f') => Some(Action::HistoryForward),
            _ => {
                tui.post_list.handle_event(event);
                None
            }
        },
        Route::Post { .. } => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Escape => Some(Action::BackToPosts),
            TuiEvent::InputChar('r') => Some(Action::Refresh),
            TuiEvent::HistoryBack | TuiEvent::Backspace => Some(Action::HistoryBack),
            TuiEvent::HistoryForward | TuiEvent::InputChar('f') => Some(Action::HistoryForward),
            _ => {
                tui.post_detail.handle_event(event);
                None
            }
        },
        // Letters belong to the form here
        Route::Create => match event {
            TuiEvent::Escape => Some(Action::BackToPosts),
            TuiEvent::HistoryBack => Some(Action::HistoryBack),
            TuiEvent::HistoryForward => Some(Action::HistoryForward),
            _ => match tui.form.handle_event(event) {
                Some(FormEvent::Submit(post)) => Some(Action::SubmitPost(post)),
                None => None,
            },
        },
        Route::Unknown => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Escape | TuiEvent::Enter => Some(Action::BackToPosts),
            TuiEvent::HistoryBack | TuiEvent::Backspace => Some(Action::HistoryBack),
            TuiEvent::HistoryForward => Some(Action::HistoryForward),
            _ => None,
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol: harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Leaves raw mode and the alternate screen when dropped, so an `Err`
/// returned from the event loop restores the terminal just like a clean exit.
struct RestoreGuard {
    restore: fn(),
}

impl RestoreGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Build the HTTP client from a resolved config.
pub fn build_api(config: &ResolvedConfig) -> Result<Arc<dyn BlogApi>, ApiError> {
    let api = HttpBlogApi::new(&config.api_base_url, config.request_timeout)?;
    info!("Using blog API at {}", api.base_url());
    Ok(Arc::new(api))
}

/// Carries out `effects` and reports whether the app should quit.
fn dispatch(
    app: &App,
    tui: &mut TuiState,
    effects: Vec<Effect>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    tui.sync_route(app.route);
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::ScrollToTop => tui.post_list.scroll_to_top(),
            request => tasks::spawn_effect(app.api.clone(), request, tx.clone()),
        }
    }
    quit
}

/// Runs the interface starting at `start` and returns the location the user
/// was at when they quit.
pub fn run(
    api: Arc<dyn BlogApi>,
    config: &ResolvedConfig,
    start: Location,
) -> std::io::Result<Location> {
    let mut app = App::new(api, SiteInfo::from_config(config), start);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    // Declared first so it drops last, after the modes are popped
    let _restore_guard = RestoreGuard::new(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effects = update(&mut app, Action::Init);
    let mut should_quit = dispatch(&app, &mut tui, effects, &tx);

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut shown_title = String::new();

    while !should_quit {
        let title = window_title(&app);
        if title != shown_title {
            if let Err(e) = execute!(stdout(), SetTitle(&title)) {
                warn!("Failed to set window title: {}", e);
            }
            shown_title = title;
        }

        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = map_event(&app, &mut tui, &event) {
                debug!("Key mapped to {:?}", action);
                let effects = update(&mut app, action);
                if dispatch(&app, &mut tui, effects, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (API responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = update(&mut app, action);
            if dispatch(&app, &mut tui, effects, &tx) {
                should_quit = true;
                break;
            }
        }
    }

    info!("Exiting at {}", app.location());
    Ok(app.location().clone())
}
