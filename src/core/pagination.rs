//! # Paginated List Controller
//!
//! Keeps three things consistent: the page requested by the location, the
//! request sent to the API, and the page result on screen.
//!
//! The controller never starts a load on its own initiative. The app applies a
//! location, the location yields a requested page, and `sync` decides whether
//! that page needs fetching. Back/forward navigation therefore reloads for free.

use log::debug;

use crate::api::{ApiError, PageResult, PaginationInfo, Post};
use crate::core::load::{Fenced, RequestToken, TokenSource};

#[derive(Debug, Default)]
pub struct PaginatedList {
    requested_page: Option<u32>,
    load: Fenced<PageResult>,
}

impl PaginatedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the list in line with the page the location asks for.
    ///
    /// Returns a token when a fetch for `page` has to be issued: on first
    /// entry, when the page changed, or when `force` asks for a refresh.
    pub fn sync(
        &mut self,
        page: u32,
        tokens: &mut TokenSource,
        force: bool,
    ) -> Option<RequestToken> {
        let unchanged = self.requested_page == Some(page) && !self.load.is_idle();
        if unchanged && !force {
            return None;
        }
        let token = tokens.issue();
        debug!(
            "List: page {} requested (token {}, force={})",
            page,
            token.value(),
            force
        );
        self.requested_page = Some(page);
        self.load.begin(token);
        Some(token)
    }

    /// Applies a fetch result. Stale results are dropped and `false` returned.
    pub fn apply(&mut self, token: RequestToken, result: Result<PageResult, ApiError>) -> bool {
        let applied = self.load.resolve(token, result);
        if !applied {
            debug!("List: discarded stale response (token {})", token.value());
        }
        applied
    }

    /// Drops all view state when the list is left.
    pub fn teardown(&mut self) {
        self.requested_page = None;
        self.load.reset();
    }

    pub fn requested_page(&self) -> Option<u32> {
        self.requested_page
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn is_failed(&self) -> bool {
        self.load.failure().is_some()
    }

    /// Posts on screen. Empty unless the last load succeeded.
    pub fn posts(&self) -> &[Post] {
        self.load
            .ready()
            .map(|page| page.posts.as_slice())
            .unwrap_or(&[])
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.load.ready().map(|page| &page.pagination)
    }

    /// The page number shown to the user.
    pub fn current_page(&self) -> u32 {
        self.pagination()
            .map(|info| info.current_page)
            .or(self.requested_page)
            .unwrap_or(1)
    }

    /// Target of the Previous button, if it is enabled.
    pub fn prev_page(&self) -> Option<u32> {
        let info = self.pagination()?;
        if !info.has_prev {
            return None;
        }
        self.requested_page.map(|page| page.saturating_sub(1))
    }

    /// Target of the Next button, if it is enabled.
    pub fn next_page(&self) -> Option<u32> {
        let info = self.pagination()?;
        if !info.has_next {
            return None;
        }
        self.requested_page.map(|page| page.saturating_add(1))
    }
}
