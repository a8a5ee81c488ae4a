//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! touches the network.

use postdeck_core::models::Credential;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Exchange a credential for a token.
    SpawnLogin { task: TaskId, credential: Credential },

    /// Fetch the post list with a bearer token.
    FetchPosts { task: TaskId, token: String },
}
