//! Feature slices for the TUI (state/update/render per view).

pub mod login;
pub mod posts;
