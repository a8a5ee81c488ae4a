//! Full-screen terminal browser for postdeck.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod session;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::{Result, bail};
use postdeck_core::api::ApiClient;
use postdeck_core::config::ContentMode;
pub use runtime::TuiRuntime;
use tracing::info;

/// Runs the interactive browser until the user quits.
///
/// # Errors
/// Fails when not attached to a terminal, or when the terminal cannot be set
/// up or drawn to.
pub fn run_browser(api: ApiClient, content_mode: ContentMode) -> Result<()> {
    if !stderr().is_terminal() {
        bail!(
            "The browser requires a terminal.\n\
             Use `postdeck posts --username <name>` for non-interactive use."
        );
    }

    info!(base_url = %api.base_url(), "starting browser");
    let mut runtime = TuiRuntime::new(api, content_mode)?;
    runtime.run()
}
