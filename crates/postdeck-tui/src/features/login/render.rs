//! Login view rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{LoginField, LoginState};
use crate::common::{TextField, truncate_with_ellipsis};

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 11;
const LABEL_WIDTH: usize = 10;
const MASK: char = '•';

/// Line index of the username field inside the popup body.
const USERNAME_ROW: u16 = 2;
const PASSWORD_ROW: u16 = 3;

/// Renders the centered login form and places the cursor in the focused field.
pub fn render_login(
    login: &LoginState,
    logging_in: bool,
    base_url: &str,
    frame: &mut Frame,
    area: Rect,
) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let border_color = if login.error.is_some() {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Log in ")
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, popup);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );
    let lines = login_lines(login, logging_in, base_url, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);

    if !logging_in {
        let (field, row) = match login.focus {
            LoginField::Username => (&login.username, USERNAME_ROW),
            LoginField::Password => (&login.password, PASSWORD_ROW),
        };
        let text_before_cursor = visible_value(field, login.focus == LoginField::Password)
            .chars()
            .take(field.cursor())
            .collect::<String>();
        let x = inner.x + (LABEL_WIDTH + text_before_cursor.width()) as u16;
        if x < inner.x + inner.width && inner.height > row {
            frame.set_cursor_position(Position::new(x, inner.y + row));
        }
    }
}

/// Body lines of the login form. Pure, so it can be asserted on directly.
pub fn login_lines(
    login: &LoginState,
    logging_in: bool,
    base_url: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let field_width = width.saturating_sub(LABEL_WIDTH);

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&format!("Server: {base_url}"), width),
            dim,
        )),
        Line::from(""),
        field_line(
            "Username",
            &visible_value(&login.username, false),
            login.focus == LoginField::Username,
            field_width,
        ),
        field_line(
            "Password",
            &visible_value(&login.password, true),
            login.focus == LoginField::Password,
            field_width,
        ),
        Line::from(""),
    ];

    if logging_in {
        lines.push(Line::from(Span::styled(
            "Logging in…",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter log in · Tab switch field · Esc quit",
        dim,
    )));
    lines
}

fn visible_value(field: &TextField, masked: bool) -> String {
    if masked {
        std::iter::repeat_n(MASK, field.value().chars().count()).collect()
    } else {
        field.value().to_string()
    }
}

fn field_line(label: &str, value: &str, focused: bool, width: usize) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        Span::raw(truncate_with_ellipsis(value, width)),
    ])
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_password_is_masked() {
        let mut login = LoginState::default();
        login.username.insert_str("alice");
        login.password.insert_str("secret");

        let text = text_of(&login_lines(&login, false, "http://api.test", 40));

        assert!(text.iter().any(|l| l.contains("alice")));
        assert!(text.iter().all(|l| !l.contains("secret")));
        assert!(text.iter().any(|l| l.contains("••••••")));
    }

    #[test]
    fn test_error_line_shown() {
        let login = LoginState {
            error: Some("Invalid username or password".to_string()),
            ..LoginState::default()
        };

        let text = text_of(&login_lines(&login, false, "http://api.test", 40));

        assert!(text.iter().any(|l| l == "Invalid username or password"));
    }

    #[test]
    fn test_logging_in_replaces_error() {
        let login = LoginState {
            error: Some("Invalid username or password".to_string()),
            ..LoginState::default()
        };

        let text = text_of(&login_lines(&login, true, "http://api.test", 40));

        assert!(text.iter().any(|l| l == "Logging in…"));
        assert!(text.iter().all(|l| !l.contains("Invalid")));
    }
}
