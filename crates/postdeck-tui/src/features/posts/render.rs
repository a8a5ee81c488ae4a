//! Post list rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::card::card_lines;
use super::state::{ListLayout, PostListState};

/// All lines of the list, before scrolling.
///
/// A fetch error is shown above whatever posts are still held. Cards are
/// separated by a blank line.
pub fn post_list_lines(state: &PostListState, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if state.cards.is_empty() {
        if state.error.is_none() {
            let placeholder = if state.loaded {
                "No posts yet."
            } else {
                "Loading posts…"
            };
            lines.push(Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            )));
        }
        return lines;
    }

    for (i, card) in state.cards.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(card_lines(card, width));
    }
    lines
}

/// Renders the scrollable list and records its layout for the reducer.
pub fn render_posts(state: &PostListState, frame: &mut Frame, area: Rect) {
    let title = format!(" Posts ({}) ", state.cards.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = post_list_lines(state, inner.width as usize);
    let layout = ListLayout {
        total_lines: lines.len(),
        viewport_height: inner.height as usize,
    };
    state.layout.set(layout);

    let scroll = state.scroll.min(layout.max_scroll());
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(scroll)
        .take(layout.viewport_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);
}
