//! # Fenced Loads
//!
//! Every view that waits on the API goes through the same little state machine:
//!
//! ```text
//! Idle ──begin──► Loading ──resolve(Ok)──► Ready
//!                    │
//!                    └──resolve(Err)─────► Failed
//! Ready | Failed ──begin──► Loading
//! ```
//!
//! Each `begin` is tagged with a fresh `RequestToken`. A response is applied
//! only if it carries the token of the most recent `begin`; anything else is a
//! stale response for a request the view has already moved past and is dropped.

use crate::api::ApiError;

/// Identifies one issued request. Tokens are unique and increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out request tokens. One source is shared by every view of an `App`.
#[derive(Debug, Default)]
pub struct TokenSource {
    issued: u64,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// A `LoadState` guarded by the token of the request it is waiting on.
#[derive(Debug, Clone)]
pub struct Fenced<T> {
    state: LoadState<T>,
    pending: Option<RequestToken>,
}

impl<T> Default for Fenced<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fenced<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Enters `Loading` for a new request; any earlier request becomes stale.
    pub fn begin(&mut self, token: RequestToken) {
        self.state = LoadState::Loading;
        self.pending = Some(token);
    }

    /// Applies a response. Returns `false` (and changes nothing) when the
    /// token does not belong to the request currently awaited.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    /// Back to `Idle`; in-flight responses will be discarded.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.pending = None;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
