//! Single-post view: one fenced load per post id.

use log::debug;

use crate::api::{ApiError, FaultKind, Post};
use crate::core::load::{Fenced, RequestToken, TokenSource};

#[derive(Debug, Default)]
pub struct PostView {
    id: Option<u64>,
    load: Fenced<Post>,
}

impl PostView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading `id` unless it is already shown or in flight.
    pub fn open(&mut self, id: u64, tokens: &mut TokenSource, force: bool) -> Option<RequestToken> {
        if self.id == Some(id) && !self.load.is_idle() && !force {
            return None;
        }
        let token = tokens.issue();
        debug!("Detail: post {} requested (token {})", id, token.value());
        self.id = Some(id);
        self.load.begin(token);
        Some(token)
    }

    pub fn apply(&mut self, token: RequestToken, result: Result<Post, ApiError>) -> bool {
        let applied = self.load.resolve(token, result);
        if !applied {
            debug!("Detail: discarded stale response (token {})", token.value());
        }
        applied
    }

    pub fn teardown(&mut self) {
        self.id = None;
        self.load.reset();
    }

    pub fn post(&self) -> Option<&Post> {
        self.load.ready()
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Kind of the last failure, if the lookup failed.
    pub fn fault(&self) -> Option<FaultKind> {
        self.load.failure().map(ApiError::kind)
    }

    /// Every failed lookup renders as "not found".
    pub fn is_not_found(&self) -> bool {
        self.fault().is_some()
    }
}
