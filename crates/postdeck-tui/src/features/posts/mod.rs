//! Post-listing view.
//!
//! Fetches the post list whenever it observes a new token, guards against
//! out-of-order results with task ids and renders each post as a card.

mod card;
mod render;
mod state;
mod update;

pub use card::card_lines;
pub use render::{post_list_lines, render_posts};
pub use state::{FETCH_FAILED_MESSAGE, ListLayout, PostListState};
pub use update::{handle_key, handle_posts_loaded, observe_token, reload};
