//! Login view reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use postdeck_core::models::Token;
use tracing::{debug, warn};

use super::state::{LOGIN_FAILED_MESSAGE, LoginState};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

/// Handles a key while the login form is shown.
pub fn handle_key(
    login: &mut LoginState,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    key: KeyEvent,
) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => submit(login, tasks, seq),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.toggle_focus();
            vec![]
        }
        _ => {
            login.focused_mut().handle_key(key);
            vec![]
        }
    }
}

pub fn handle_paste(login: &mut LoginState, text: &str) {
    login.focused_mut().insert_str(text);
}

/// Submits the form as-is. Ignored while a login is already in flight.
pub fn submit(login: &mut LoginState, tasks: &mut Tasks, seq: &mut TaskSeq) -> Vec<UiEffect> {
    if tasks.login.is_running() {
        debug!("login already in flight, ignoring submit");
        return vec![];
    }
    let task = seq.next_id();
    tasks.login.start(task);
    vec![UiEffect::SpawnLogin {
        task,
        credential: login.credential(),
    }]
}

/// Applies a login result and returns the access token to hand to the session.
///
/// Failures (including a success carrying an empty token) set the fixed error
/// message; the cause only goes to the log.
pub fn handle_login_result(
    login: &mut LoginState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<Token, String>,
) -> Option<String> {
    if !tasks.login.finish_if_active(task) {
        debug!(?task, "dropping result of superseded login");
        return None;
    }

    match result {
        Ok(token) if !token.access_token.is_empty() => {
            login.error = None;
            Some(token.access_token)
        }
        Ok(_) => {
            warn!("login returned an empty access token");
            login.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            None
        }
        Err(cause) => {
            warn!(%cause, "login failed");
            login.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            None
        }
    }
}
