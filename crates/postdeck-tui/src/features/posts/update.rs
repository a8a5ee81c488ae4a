//! Post list reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use postdeck_core::config::ContentMode;
use postdeck_core::models::Post;
use tracing::{debug, warn};

use super::state::{FETCH_FAILED_MESSAGE, PostListState};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

const PAGE_STEP_FALLBACK: usize = 10;

/// Called with the session token after every reducer step.
///
/// Issues exactly one fetch the first time a token is seen and once per
/// change; an unchanged token issues nothing. Empty tokens never fetch.
pub fn observe_token(
    posts: &mut PostListState,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    token: &str,
) -> Vec<UiEffect> {
    if token.is_empty() || posts.observed_token.as_deref() == Some(token) {
        return vec![];
    }
    posts.observed_token = Some(token.to_string());
    start_fetch(tasks, seq, token)
}

/// Re-fetches with the current token, if there is one.
pub fn reload(posts: &PostListState, tasks: &mut Tasks, seq: &mut TaskSeq) -> Vec<UiEffect> {
    match posts.observed_token.as_deref() {
        Some(token) if !token.is_empty() => start_fetch(tasks, seq, token),
        _ => vec![],
    }
}

fn start_fetch(tasks: &mut Tasks, seq: &mut TaskSeq, token: &str) -> Vec<UiEffect> {
    let task = seq.next_id();
    tasks.fetch_posts.start(task);
    vec![UiEffect::FetchPosts {
        task,
        token: token.to_string(),
    }]
}

/// Applies a fetch result if it belongs to the latest fetch.
///
/// Success replaces the list and clears the error; failure keeps the list and
/// sets the fetch error message.
pub fn handle_posts_loaded(
    posts: &mut PostListState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<Vec<Post>, String>,
    mode: ContentMode,
) {
    if !tasks.fetch_posts.finish_if_active(task) {
        debug!(?task, "dropping result of superseded fetch");
        return;
    }

    match result {
        Ok(list) => {
            debug!(count = list.len(), "posts loaded");
            posts.replace_posts(list, mode);
            posts.error = None;
            posts.loaded = true;
            posts.scroll = 0;
        }
        Err(cause) => {
            warn!(%cause, "fetching posts failed");
            posts.error = Some(FETCH_FAILED_MESSAGE.to_string());
        }
    }
}

/// Handles a key while the post list is shown.
pub fn handle_key(
    posts: &mut PostListState,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    key: KeyEvent,
) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    let layout = posts.layout.get();
    let max = layout.max_scroll();
    let page = if layout.viewport_height > 1 {
        layout.viewport_height - 1
    } else {
        PAGE_STEP_FALLBACK
    };

    match key.code {
        KeyCode::Char('r') => return reload(posts, tasks, seq),
        KeyCode::Up | KeyCode::Char('k') => posts.scroll = posts.scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => posts.scroll = (posts.scroll + 1).min(max),
        KeyCode::PageUp => posts.scroll = posts.scroll.saturating_sub(page),
        KeyCode::PageDown | KeyCode::Char(' ') => posts.scroll = (posts.scroll + page).min(max),
        KeyCode::Home | KeyCode::Char('g') => posts.scroll = 0,
        KeyCode::End | KeyCode::Char('G') => posts.scroll = max,
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::features::posts::ListLayout;

    const MODE: ContentMode = ContentMode::Sanitized;

    fn sample(id: i64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            content: String::new(),
            image_url: None,
            video_url: None,
        }
    }

    fn fetch_count(effects: &[UiEffect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, UiEffect::FetchPosts { .. }))
            .count()
    }

    #[test]
    fn test_first_token_fetches_once() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        let effects = observe_token(&mut posts, &mut tasks, &mut seq, "abc123");

        assert_eq!(
            effects,
            vec![UiEffect::FetchPosts {
                task: TaskId(0),
                token: "abc123".to_string(),
            }]
        );
        assert!(tasks.fetch_posts.is_running());
    }

    #[test]
    fn test_unchanged_token_does_not_refetch() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        let mut total = 0;
        for _ in 0..5 {
            total += fetch_count(&observe_token(&mut posts, &mut tasks, &mut seq, "abc123"));
        }

        assert_eq!(total, 1);
    }

    #[test]
    fn test_each_token_change_fetches_once() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        let mut total = 0;
        for token in ["a", "a", "b", "b", "c", "a"] {
            total += fetch_count(&observe_token(&mut posts, &mut tasks, &mut seq, token));
        }

        assert_eq!(total, 4);
    }

    #[test]
    fn test_empty_token_never_fetches() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        assert!(observe_token(&mut posts, &mut tasks, &mut seq, "").is_empty());
        assert!(reload(&posts, &mut tasks, &mut seq).is_empty());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        observe_token(&mut posts, &mut tasks, &mut seq, "old");
        observe_token(&mut posts, &mut tasks, &mut seq, "new");

        // Newer fetch resolves first, then the superseded one.
        handle_posts_loaded(&mut posts, &mut tasks, TaskId(1), Ok(vec![sample(2)]), MODE);
        handle_posts_loaded(&mut posts, &mut tasks, TaskId(0), Ok(vec![sample(1)]), MODE);

        assert_eq!(posts.posts, vec![sample(2)]);
        assert_eq!(posts.cards.len(), 1);
        assert_eq!(posts.cards[0].heading, "Post 2");
    }

    #[test]
    fn test_failure_sets_error_and_keeps_posts() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        observe_token(&mut posts, &mut tasks, &mut seq, "abc123");
        handle_posts_loaded(&mut posts, &mut tasks, TaskId(0), Ok(vec![sample(1)]), MODE);

        reload(&posts, &mut tasks, &mut seq);
        handle_posts_loaded(
            &mut posts,
            &mut tasks,
            TaskId(1),
            Err("Fetching posts failed (HTTP 500)".to_string()),
            MODE,
        );

        assert_eq!(posts.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(posts.posts, vec![sample(1)]);
        assert!(!tasks.fetch_posts.is_running());
    }

    #[test]
    fn test_success_clears_error() {
        let mut posts = PostListState {
            error: Some(FETCH_FAILED_MESSAGE.to_string()),
            ..PostListState::default()
        };
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        observe_token(&mut posts, &mut tasks, &mut seq, "abc123");

        handle_posts_loaded(&mut posts, &mut tasks, TaskId(0), Ok(vec![]), MODE);

        assert_eq!(posts.error, None);
        assert!(posts.loaded);
    }

    #[test]
    fn test_reload_key_fetches_with_current_token() {
        let mut posts = PostListState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        observe_token(&mut posts, &mut tasks, &mut seq, "abc123");

        let effects = handle_key(
            &mut posts,
            &mut tasks,
            &mut seq,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
        );

        assert_eq!(
            effects,
            vec![UiEffect::FetchPosts {
                task: TaskId(1),
                token: "abc123".to_string(),
            }]
        );
    }

    #[test]
    fn test_scroll_is_clamped_to_layout() {
        let mut posts = PostListState::default();
        posts.layout.set(ListLayout {
            total_lines: 30,
            viewport_height: 10,
        });
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        let press = |posts: &mut PostListState, tasks: &mut Tasks, seq: &mut TaskSeq, code| {
            handle_key(posts, tasks, seq, KeyEvent::new(code, KeyModifiers::NONE));
        };

        press(&mut posts, &mut tasks, &mut seq, KeyCode::End);
        assert_eq!(posts.scroll, 20);
        press(&mut posts, &mut tasks, &mut seq, KeyCode::Down);
        assert_eq!(posts.scroll, 20);
        press(&mut posts, &mut tasks, &mut seq, KeyCode::PageUp);
        assert_eq!(posts.scroll, 11);
        press(&mut posts, &mut tasks, &mut seq, KeyCode::Home);
        assert_eq!(posts.scroll, 0);
    }
}
