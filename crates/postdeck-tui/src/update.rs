//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{login, posts};
use crate::session::Screen;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginFinished { task, result } => {
            if let Some(token) =
                login::handle_login_result(&mut app.login, &mut app.tasks, task, result)
                && app.session.authenticate(token)
            {
                info!("session authenticated");
            }
            vec![]
        }
        UiEvent::PostsLoaded { task, result } => {
            posts::handle_posts_loaded(
                &mut app.posts,
                &mut app.tasks,
                task,
                result,
                app.content_mode,
            );
            vec![]
        }
    };

    effects.extend(sync_post_view(app));
    effects
}

/// Hands the session token to the post view, which decides whether to fetch.
///
/// Runs after every event so a token change is noticed on the same step it
/// happens, whatever caused it.
fn sync_post_view(app: &mut AppState) -> Vec<UiEffect> {
    match app.session.token() {
        Some(token) => {
            posts::observe_token(&mut app.posts, &mut app.tasks, &mut app.task_seq, token)
        }
        None => vec![],
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            if app.screen() == Screen::Login {
                login::handle_paste(&mut app.login, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.screen() {
        Screen::Login => {
            if key.code == KeyCode::Esc {
                return vec![UiEffect::Quit];
            }
            login::handle_key(&mut app.login, &mut app.tasks, &mut app.task_seq, key)
        }
        Screen::Posts => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
            _ => posts::handle_key(&mut app.posts, &mut app.tasks, &mut app.task_seq, key),
        },
    }
}
