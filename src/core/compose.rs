//! New-post submission. Field editing lives in the TUI form; the core only
//! tracks whether a submission is in flight and how the last one ended.

use log::debug;

use crate::api::{ApiError, NewPost};
use crate::core::load::{Fenced, RequestToken, TokenSource};

#[derive(Debug, Default)]
pub struct CreateFlow {
    submission: Fenced<()>,
}

impl CreateFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission. Refused while one is already in flight or when a
    /// required field is blank.
    pub fn submit(&mut self, post: &NewPost, tokens: &mut TokenSource) -> Option<RequestToken> {
        if self.submission.is_loading() {
            debug!("Create: submit ignored, previous submission still in flight");
            return None;
        }
        if !post.is_complete() {
            debug!("Create: submit ignored, title and content are required");
            return None;
        }
        let token = tokens.issue();
        self.submission.begin(token);
        Some(token)
    }

    /// Records the outcome. `None` means the result was stale.
    pub fn apply(
        &mut self,
        token: RequestToken,
        result: Result<(), ApiError>,
    ) -> Option<Result<(), ApiError>> {
        let outcome = result.clone();
        if self.submission.resolve(token, result) {
            Some(outcome)
        } else {
            debug!("Create: discarded stale submission result (token {})", token.value());
            None
        }
    }

    pub fn teardown(&mut self) {
        self.submission.reset();
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_loading()
    }
}
