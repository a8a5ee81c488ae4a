//! Interactive browser command.

use anyhow::Result;
use postdeck_core::api::ApiClient;
use postdeck_core::config::ContentMode;

/// Runs the full-screen browser. Must be called inside a tokio runtime
/// context so request effects can be spawned.
pub fn run(api: ApiClient, content_mode: ContentMode) -> Result<()> {
    postdeck_tui::run_browser(api, content_mode)
}
