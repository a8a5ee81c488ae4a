//! Events fed into the reducer.

use crossterm::event::Event;
use postdeck_core::models::{Post, Token};

use crate::common::TaskId;

/// Everything that can change UI state.
///
/// Async results carry the id of the task that produced them so the reducer
/// can drop results from superseded requests. Errors arrive as rendered
/// strings; the views never branch on the cause.
#[derive(Debug)]
pub enum UiEvent {
    /// Render cadence tick.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// Result of a login exchange.
    LoginFinished {
        task: TaskId,
        result: Result<Token, String>,
    },
    /// Result of a post list fetch.
    PostsLoaded {
        task: TaskId,
        result: Result<Vec<Post>, String>,
    },
}

impl UiEvent {
    pub fn posts_loaded(task: TaskId, result: anyhow::Result<Vec<Post>>) -> Self {
        UiEvent::PostsLoaded {
            task,
            result: result.map_err(|e| format!("{e:#}")),
        }
    }

    pub fn login_finished(task: TaskId, result: anyhow::Result<Token>) -> Self {
        UiEvent::LoginFinished {
            task,
            result: result.map_err(|e| format!("{e:#}")),
        }
    }
}
