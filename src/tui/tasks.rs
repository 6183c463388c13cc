//! Background requests.
//!
//! The core asks for I/O through `Effect`s; this module performs the HTTP
//! ones on the tokio runtime and reports back as `Action`s over the event
//! loop's channel. Every response carries the token it was issued with, so
//! the core can drop answers that arrive too late.

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::api::BlogApi;
use crate::core::action::{Action, Effect};

/// Performs one request effect and turns the outcome into an action.
/// Non-request effects yield `None`.
pub async fn execute(api: Arc<dyn BlogApi>, effect: Effect) -> Option<Action> {
    match effect {
        Effect::FetchPage { token, page } => {
            debug!("Fetching page {} (token {})", page, token.value());
            let result = api.list_posts(page).await;
            Some(Action::PageLoaded { token, result })
        }
        Effect::FetchPost { token, id } => {
            debug!("Fetching post {} (token {})", id, token.value());
            let result = api.get_post(id).await;
            Some(Action::PostLoaded { token, result })
        }
        Effect::SubmitPost { token, post } => {
            info!("Submitting post {:?} (token {})", post.title, token.value());
            let result = api.create_post(&post).await;
            Some(Action::PostSubmitted { token, result })
        }
        Effect::ScrollToTop | Effect::Quit => None,
    }
}

/// Spawns `execute` and forwards its action to the event loop.
pub fn spawn_effect(api: Arc<dyn BlogApi>, effect: Effect, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        if let Some(action) = execute(api, effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver response: receiver dropped");
        }
    });
}
