//! Post content markup handling.
//!
//! Post bodies arrive as HTML. Before they reach the terminal they go through
//! [`render_content`]: sanitized mode reduces the markup to plain text lines,
//! raw mode keeps the markup and only drops control characters.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::ContentMode;

/// Tag body that skips over quoted attribute values, so `>` inside quotes does
/// not end the tag.
const TAG_BODY: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

/// An unclosed block runs to the end of the input.
static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*script\b.*?(?:</\s*script\s*>|\z)|<\s*style\b.*?(?:</\s*style\s*>|\z)")
        .expect("valid regex")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("valid regex"));

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)<\s*li\b{TAG_BODY}>")).expect("valid regex")
});

static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<\s*/?\s*(?:br|p|div|li|ul|ol|h[1-6]|blockquote|pre|tr|table|section|article|hr)\b{TAG_BODY}>"
    ))
    .expect("valid regex")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("<{TAG_BODY}>")).expect("valid regex"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});").expect("valid regex")
});

/// Turns post content into display lines according to `mode`.
pub fn render_content(content: &str, mode: ContentMode) -> Vec<String> {
    match mode {
        ContentMode::Raw => content.lines().map(strip_controls).collect(),
        ContentMode::Sanitized => sanitize_to_lines(content),
    }
}

/// Reduces HTML to readable text lines.
///
/// Script and style blocks and comments are dropped with their contents,
/// block-level tags become line breaks, list items get a bullet, every other
/// tag is removed and common entities are decoded. Control characters never
/// survive, whether literal or entity-encoded. Runs of blank lines collapse to
/// one; leading and trailing blank lines are removed.
pub fn sanitize_to_lines(html: &str) -> Vec<String> {
    let text = SCRIPT_OR_STYLE.replace_all(html, "");
    let text = COMMENT.replace_all(&text, "");
    let text = LIST_ITEM.replace_all(&text, "\n• ");
    let text = BLOCK_BOUNDARY.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    let text: String = text
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect();

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = collapse_whitespace(line);
        if line.is_empty() && lines.last().is_none_or(String::is_empty) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Removes control characters (escape sequences, bell, NUL, ...) from one line
/// of text so it is safe to write to a terminal.
pub fn strip_controls(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[1];
            decode_entity(entity).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Control code points are left undecoded.
fn decode_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .filter(|c| !c.is_control());
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .filter(|c| !c.is_control());
    }
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "hellip" => Some('…'),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        _ => None,
    }
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_becomes_text() {
        assert_eq!(sanitize_to_lines("<p>Hi</p>"), vec!["Hi"]);
    }

    #[test]
    fn test_raw_mode_keeps_markup() {
        assert_eq!(
            render_content("<p>Hi</p>", ContentMode::Raw),
            vec!["<p>Hi</p>"]
        );
    }

    #[test]
    fn test_scripts_and_styles_are_dropped() {
        let html = "<p>safe</p><script>alert('x')</script><STYLE>p{}</STYLE><!-- note -->";
        assert_eq!(sanitize_to_lines(html), vec!["safe"]);
    }

    #[test]
    fn test_blocks_split_lines() {
        let html = "<h2>Title</h2><p>First<br>second</p>\n\n\n<div>third</div>";
        assert_eq!(
            sanitize_to_lines(html),
            vec!["Title", "", "First", "second", "", "third"]
        );
    }

    #[test]
    fn test_list_items_get_bullets() {
        let html = "<ul><li>one</li><li><strong>two</strong></li></ul>";
        assert_eq!(sanitize_to_lines(html), vec!["• one", "", "• two"]);
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(
            sanitize_to_lines("a &amp;lt; b &lt; c &#233; &#x41; &bogus;"),
            vec!["a &lt; b < c é A &bogus;"]
        );
    }

    #[test]
    fn test_inline_tags_and_attributes_removed() {
        let html = r#"<a href="https://x.test" onclick="evil()">link</a> <em>text</em>"#;
        assert_eq!(sanitize_to_lines(html), vec!["link text"]);
    }

    #[test]
    fn test_encoded_control_characters_are_not_decoded() {
        let lines = sanitize_to_lines("<p>&#27;[2J&#x1b;]0;pwned&#7;hello&#0;</p>");
        assert_eq!(lines, vec!["&#27;[2J&#x1b;]0;pwned&#7;hello&#0;"]);
        assert!(lines.iter().all(|l| !l.chars().any(char::is_control)));
    }

    #[test]
    fn test_literal_control_characters_are_removed() {
        assert_eq!(
            sanitize_to_lines("<p>\u{1b}[31mred\u{7}</p>\r\n<p>tab\there</p>"),
            vec!["[31mred", "", "tab here"]
        );
        assert_eq!(
            render_content("\u{1b}]0;title\u{7}<b>x</b>", ContentMode::Raw),
            vec!["]0;title<b>x</b>"]
        );
    }

    #[test]
    fn test_unclosed_script_and_style_run_to_end() {
        assert_eq!(
            sanitize_to_lines("<p>ok</p><script>alert(document.cookie)"),
            vec!["ok"]
        );
        assert_eq!(
            sanitize_to_lines("<p>ok</p><style type=\"text/css\">p { color: red }"),
            vec!["ok"]
        );
        assert_eq!(sanitize_to_lines("<p>ok</p><!-- hidden"), vec!["ok"]);
    }

    #[test]
    fn test_quoted_angle_bracket_stays_inside_tag() {
        assert_eq!(
            sanitize_to_lines(r#"<a title="a>b" href='x>y'>link</a><p class="c>d">next</p>"#),
            vec!["link", "next"]
        );
    }

    #[test]
    fn test_empty_content() {
        assert!(sanitize_to_lines("").is_empty());
        assert!(sanitize_to_lines("<p></p>").is_empty());
    }
}
