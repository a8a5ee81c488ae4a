//! Credential-entry view.
//!
//! Collects a username and password, asks the runtime to exchange them for a
//! token and reports the token upward to the session. Every failure shows the
//! same message.

mod render;
mod state;
mod update;

pub use render::{login_lines, render_login};
pub use state::{LOGIN_FAILED_MESSAGE, LoginField, LoginState};
pub use update::{handle_key, handle_login_result, handle_paste, submit};
