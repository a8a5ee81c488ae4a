//! Shared building blocks for the TUI (task tracking, text helpers, input field).

pub mod task;
pub mod text;
pub mod text_field;

pub use task::{TaskId, TaskSeq, TaskState, Tasks};
pub use text::{truncate_with_ellipsis, wrap_line};
pub use text_field::TextField;
