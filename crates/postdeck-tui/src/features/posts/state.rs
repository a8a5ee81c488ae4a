use std::cell::Cell;

use postdeck_core::card::PostCard;
use postdeck_core::config::ContentMode;
use postdeck_core::models::Post;

/// Shown in place of the list when a fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load posts";

/// Line counts recorded during render so the reducer can clamp scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLayout {
    pub total_lines: usize,
    pub viewport_height: usize,
}

impl ListLayout {
    pub fn max_scroll(self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }
}

#[derive(Debug, Default)]
pub struct PostListState {
    /// Token the current list was requested with.
    pub observed_token: Option<String>,
    pub posts: Vec<Post>,
    /// `posts` rendered to view models; rebuilt only when `posts` changes.
    pub cards: Vec<PostCard>,
    pub error: Option<String>,
    /// At least one fetch has completed successfully.
    pub loaded: bool,
    /// First visible line.
    pub scroll: usize,
    /// Set during render.
    pub layout: Cell<ListLayout>,
}

impl PostListState {
    /// Replaces the list and builds its cards once, up front.
    pub fn replace_posts(&mut self, posts: Vec<Post>, mode: ContentMode) {
        self.cards = posts
            .iter()
            .map(|post| PostCard::from_post(post, mode))
            .collect();
        self.posts = posts;
    }
}
