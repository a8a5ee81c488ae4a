//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! return effects. The only write is the post list layout cell, which the
//! reducer reads back to clamp scrolling.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::features::{login, posts};
use crate::session::Screen;
use crate::state::AppState;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    match app.screen() {
        Screen::Login => login::render_login(
            &app.login,
            app.tasks.login.is_running(),
            &app.base_url,
            frame,
            chunks[1],
        ),
        Screen::Posts => posts::render_posts(&app.posts, frame, chunks[1]),
    }
    render_status_line(app, frame, chunks[2]);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let state = if app.session.is_authenticated() {
        Span::styled("signed in", Style::default().fg(Color::Green))
    } else {
        Span::styled("signed out", Style::default().fg(Color::DarkGray))
    };
    let line = Line::from(vec![
        Span::styled(
            " postdeck ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        state,
        Span::styled(
            format!(" · {}", app.content_mode.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Activity on the left, key hints after it.
pub(crate) fn status_text(app: &AppState) -> String {
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let activity = if app.tasks.login.is_running() {
        Some("Logging in…")
    } else if app.tasks.fetch_posts.is_running() {
        Some("Loading posts…")
    } else {
        None
    };
    let hints = match app.screen() {
        Screen::Login => "Enter log in · Tab switch · Esc quit",
        Screen::Posts => "↑/↓ scroll · r reload · q quit",
    };

    match activity {
        Some(activity) => format!(" {spinner} {activity}  {hints}"),
        None => format!(" {hints}"),
    }
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let text = truncate_with_ellipsis(&status_text(app), area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use postdeck_core::config::ContentMode;
    use postdeck_core::models::Post;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::TaskId;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_unauthenticated_shows_login_form() {
        let app = AppState::new("http://api.test/", ContentMode::Sanitized);
        let screen = draw(&app);
        assert!(screen.contains("Log in"));
        assert!(screen.contains("Username"));
        assert!(screen.contains("signed out"));
    }

    #[test]
    fn test_authenticated_shows_posts() {
        let mut app = AppState::new("http://api.test/", ContentMode::Raw);
        app.session.authenticate("abc123".to_string());
        app.posts.replace_posts(
            vec![Post {
                id: 1,
                title: "Hello".to_string(),
                content: "<p>Hi</p>".to_string(),
                image_url: None,
                video_url: None,
            }],
            app.content_mode,
        );
        app.posts.loaded = true;

        let screen = draw(&app);

        assert!(screen.contains("Posts (1)"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("<p>Hi</p>"));
        assert!(!screen.contains("[image]"));
        assert!(!screen.contains("Username"));
    }

    #[test]
    fn test_status_reports_activity() {
        let mut app = AppState::new("http://api.test/", ContentMode::Sanitized);
        assert!(!status_text(&app).contains('…'));

        app.tasks.login.start(TaskId(0));
        assert!(status_text(&app).contains("Logging in…"));

        app.tasks.login.finish_if_active(TaskId(0));
        app.session.authenticate("abc123".to_string());
        app.tasks.fetch_posts.start(TaskId(1));
        assert!(status_text(&app).contains("Loading posts…"));
    }
}
