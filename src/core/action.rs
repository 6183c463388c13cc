//! # Actions
//!
//! Everything that can happen in Quire becomes an `Action`.
//! User presses →? That's `Action::NextPage`.
//! API responds? That's `Action::PageLoaded { token, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect`s the event loop must carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```
//!
//! Responses carry the `RequestToken` of the request that produced them, so
//! a slow response for a page the user already moved past is dropped here
//! instead of overwriting the newer page.

use log::{debug, info, warn};

use crate::api::{ApiError, FaultKind, NewPost, PageResult, Post};
use crate::core::load::RequestToken;
use crate::core::location::{Location, Route};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// First resolution of the start location.
    Init,
    Navigate(Location),
    SetPage(u32),
    PrevPage,
    NextPage,
    OpenPost(u64),
    OpenCreate,
    /// "← Back to Posts": a fresh visit to the list root.
    BackToPosts,
    HistoryBack,
    HistoryForward,
    /// Reload the current location even if nothing changed.
    Refresh,
    SubmitPost(NewPost),
    PageLoaded {
        token: RequestToken,
        result: Result<PageResult, ApiError>,
    },
    PostLoaded {
        token: RequestToken,
        result: Result<Post, ApiError>,
    },
    PostSubmitted {
        token: RequestToken,
        result: Result<(), ApiError>,
    },
    Quit,
}

/// A request the event loop must perform on the core's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPage { token: RequestToken, page: u32 },
    FetchPost { token: RequestToken, id: u64 },
    SubmitPost { token: RequestToken, post: NewPost },
    /// Reset the list viewport to its first row.
    ScrollToTop,
    Quit,
}

fn list_fault_message(kind: FaultKind) -> &'static str {
    match kind {
        FaultKind::NetworkError => "Could not load posts",
        FaultKind::NotFound => "No posts at this location",
    }
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Init => {
            info!("Entering {}", app.location());
            app.apply_location(false)
        }
        Action::Navigate(location) => app.navigate(location),
        Action::SetPage(page) => app.set_page(page),
        Action::PrevPage => match app.list.prev_page() {
            Some(page) => app.set_page(page),
            None => Vec::new(),
        },
        Action::NextPage => match app.list.next_page() {
            Some(page) => app.set_page(page),
            None => Vec::new(),
        },
        Action::OpenPost(id) => app.navigate(Location::post(id)),
        Action::OpenCreate => app.navigate(Location::create()),
        Action::BackToPosts => app.navigate(Location::root()),
        Action::HistoryBack => app.back(),
        Action::HistoryForward => app.forward(),
        Action::Refresh => {
            info!("Refreshing {}", app.location());
            app.apply_location(true)
        }
        Action::SubmitPost(post) => {
            if app.route != Route::Create {
                warn!("Ignoring post submission outside the create screen");
                return Vec::new();
            }
            match app.create.submit(&post, &mut app.tokens) {
                Some(token) => {
                    app.status_message = "Publishing...".to_string();
                    vec![Effect::SubmitPost { token, post }]
                }
                None => {
                    if !post.is_complete() {
                        app.status_message = "Title and content are required".to_string();
                    }
                    Vec::new()
                }
            }
        }
        Action::PageLoaded { token, result } => {
            let fault = result.as_ref().err().map(|e| {
                warn!("Post list failed to load: {e}");
                e.kind()
            });
            if app.list.apply(token, result)
                && let Some(kind) = fault
            {
                app.status_message = list_fault_message(kind).to_string();
            }
            Vec::new()
        }
        Action::PostLoaded { token, result } => {
            if let Err(e) = &result {
                debug!("Post lookup failed: {e}");
            }
            // Shown as not found either way; only an unreachable server earns a status line
            if app.detail.apply(token, result)
                && app.detail.fault() == Some(FaultKind::NetworkError)
            {
                app.status_message = "Could not reach the blog".to_string();
            }
            Vec::new()
        }
        Action::PostSubmitted { token, result } => match app.create.apply(token, result) {
            Some(Ok(())) => {
                info!("Post published");
                app.navigate(Location::root())
            }
            Some(Err(e)) => {
                warn!("Post was not published: {e}");
                app.status_message = format!("Post was not published ({e})");
                Vec::new()
            }
            None => Vec::new(),
        },
        Action::Quit => vec![Effect::Quit],
    }
}
