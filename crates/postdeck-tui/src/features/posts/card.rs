//! Terminal lines for a post card.

use postdeck_core::card::PostCard;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::wrap_line;

/// Heading, then body, then media, wrapped to `width` columns.
pub fn card_lines(card: &PostCard, width: usize) -> Vec<Line<'static>> {
    let heading_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let media_style = Style::default().fg(Color::Magenta);

    let mut lines: Vec<Line<'static>> = wrap_line(&card.heading, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, heading_style)))
        .collect();

    for paragraph in &card.body {
        lines.extend(
            wrap_line(paragraph, width)
                .into_iter()
                .map(|l| Line::from(Span::raw(l))),
        );
    }

    for element in &card.media {
        lines.extend(
            wrap_line(&element.label(), width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, media_style))),
        );
    }

    lines
}
