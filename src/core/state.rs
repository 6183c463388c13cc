//! # Application State
//!
//! Core business state for Quire. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn BlogApi>        // HTTP collaborator
//! ├── site: SiteInfo               // title + author for window titles
//! ├── history: History             // navigable location + back/forward
//! ├── route: Route                 // screen selected by the current location
//! ├── tokens: TokenSource          // request fencing
//! ├── list: PaginatedList          // `/`
//! ├── detail: PostView             // `/post/{id}`
//! ├── create: CreateFlow           // `/create`
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Locations flow in one direction: a location is pushed or restored, then
//! applied, and applying it is what starts loads.

use log::{debug, info, warn};
use std::sync::Arc;

use crate::api::BlogApi;
use crate::core::action::Effect;
use crate::core::compose::CreateFlow;
use crate::core::config::ResolvedConfig;
use crate::core::detail::PostView;
use crate::core::load::TokenSource;
use crate::core::location::{History, Location, Route};
use crate::core::pagination::PaginatedList;

/// Used in window titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub author: Option<String>,
}

impl SiteInfo {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            title: config.site_title.clone(),
            author: config.author.clone(),
        }
    }
}

pub struct App {
    pub api: Arc<dyn BlogApi>,
    pub site: SiteInfo,
    pub history: History,
    pub route: Route,
    pub tokens: TokenSource,
    pub list: PaginatedList,
    pub detail: PostView,
    pub create: CreateFlow,
    pub status_message: String,
}

impl App {
    /// Builds the app on `start` without loading anything (`Idle`).
    /// `Action::Init` performs the first resolution.
    pub fn new(api: Arc<dyn BlogApi>, site: SiteInfo, start: Location) -> Self {
        let route = start.route();
        Self {
            api,
            site,
            history: History::new(start),
            route,
            tokens: TokenSource::new(),
            list: PaginatedList::new(),
            detail: PostView::new(),
            create: CreateFlow::new(),
            status_message: String::new(),
        }
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// Visits `location`. Revisiting the current location changes nothing.
    pub fn navigate(&mut self, location: Location) -> Vec<Effect> {
        if &location == self.location() {
            debug!("Navigate: already at {}", location);
            return Vec::new();
        }
        info!("Navigate: {} -> {}", self.location(), location);
        self.history.push(location);
        self.apply_location(false)
    }

    /// Requests list page `page` by rewriting the location.
    pub fn set_page(&mut self, page: u32) -> Vec<Effect> {
        if page < 1 {
            warn!("Ignoring request for page {page}: pages start at 1");
            return Vec::new();
        }
        if self.route != Route::List {
            warn!("Ignoring request for page {page}: not on the post list");
            return Vec::new();
        }
        let location = self.location().with_page(page);
        let mut effects = vec![Effect::ScrollToTop];
        effects.extend(self.navigate(location));
        effects
    }

    pub fn back(&mut self) -> Vec<Effect> {
        if self.history.back().is_none() {
            return Vec::new();
        }
        info!("Back to {}", self.location());
        self.apply_location(false)
    }

    pub fn forward(&mut self) -> Vec<Effect> {
        if self.history.forward().is_none() {
            return Vec::new();
        }
        info!("Forward to {}", self.location());
        self.apply_location(false)
    }

    /// Re-resolves the current location, tearing down the view being left
    /// and starting whatever load the new route needs.
    pub fn apply_location(&mut self, force: bool) -> Vec<Effect> {
        let location = self.location().clone();
        let route = location.route();
        if route != self.route {
            self.leave(self.route);
            self.route = route;
        }
        self.status_message.clear();

        match route {
            Route::List => {
                let page = location.requested_page();
                self.list
                    .sync(page, &mut self.tokens, force)
                    .map(|token| Effect::FetchPage { token, page })
                    .into_iter()
                    .collect()
            }
            Route::Post { id } => self
                .detail
                .open(id, &mut self.tokens, force)
                .map(|token| Effect::FetchPost { token, id })
                .into_iter()
                .collect(),
            Route::Create | Route::Unknown => Vec::new(),
        }
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::List => self.list.teardown(),
            Route::Post { .. } => self.detail.teardown(),
            Route::Create => self.create.teardown(),
            Route::Unknown => {}
        }
    }

    /// Whether a spinner should be shown.
    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::List => self.list.is_loading(),
            Route::Post { .. } => self.detail.is_loading(),
            Route::Create => self.create.is_submitting(),
            Route::Unknown => false,
        }
    }
}
