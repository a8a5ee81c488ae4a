//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform one request and return the
//! resulting `UiEvent`. They never touch state; the runtime spawns them and
//! forwards the event to the inbox.

use postdeck_core::api::ApiClient;
use postdeck_core::models::Credential;
use tracing::{debug, instrument};

use crate::common::TaskId;
use crate::events::UiEvent;

#[instrument(skip_all, fields(task = task.0))]
pub async fn login(api: ApiClient, task: TaskId, credential: Credential) -> UiEvent {
    debug!(username = %credential.username, "exchanging credential");
    UiEvent::login_finished(task, api.sign_in(&credential).await)
}

#[instrument(skip_all, fields(task = task.0))]
pub async fn fetch_posts(api: ApiClient, task: TaskId, token: String) -> UiEvent {
    UiEvent::posts_loaded(task, api.get_posts(&token).await)
}
