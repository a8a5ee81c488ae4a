//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: Session          (token owner, selects the screen)
//! ├── login: LoginState         (credential form)
//! ├── posts: PostListState      (fetched posts, scroll, fetch error)
//! ├── task_seq: TaskSeq         (async task id generator)
//! └── tasks: Tasks              (latest task per kind)
//! ```

use postdeck_core::config::ContentMode;

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginState;
use crate::features::posts::PostListState;
use crate::session::{Screen, Session};

/// Everything the reducer mutates and the renderer reads.
#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub session: Session,
    pub login: LoginState,
    pub posts: PostListState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub content_mode: ContentMode,
    /// Shown on the login form so the user knows which backend they talk to.
    pub base_url: String,
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(base_url: impl Into<String>, content_mode: ContentMode) -> Self {
        Self {
            should_quit: false,
            session: Session::default(),
            login: LoginState::default(),
            posts: PostListState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            content_mode,
            base_url: base_url.into(),
            spinner_frame: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }
}
