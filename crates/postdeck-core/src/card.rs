//! Post view model shared by the browser and the text listing.

use crate::config::ContentMode;
use crate::markup;
use crate::models::Post;

/// Media attached to a post, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaElement {
    Image { src: String },
    Video { src: String, controls: bool },
}

impl MediaElement {
    pub fn label(&self) -> String {
        match self {
            MediaElement::Image { src } => format!("[image] {src}"),
            MediaElement::Video { src, controls } => {
                if *controls {
                    format!("[video ▶ controls] {src}")
                } else {
                    format!("[video] {src}")
                }
            }
        }
    }
}

/// What a single post renders as: heading, body text and media.
///
/// Every field is free of control characters, so a card can be written to a
/// terminal as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: i64,
    pub heading: String,
    pub body: Vec<String>,
    pub media: Vec<MediaElement>,
}

impl PostCard {
    pub fn from_post(post: &Post, mode: ContentMode) -> Self {
        let mut media = Vec::new();
        if let Some(src) = post.image() {
            media.push(MediaElement::Image {
                src: markup::strip_controls(src),
            });
        }
        if let Some(src) = post.video() {
            media.push(MediaElement::Video {
                src: markup::strip_controls(src),
                controls: true,
            });
        }

        Self {
            id: post.id,
            heading: markup::strip_controls(&post.title),
            body: markup::render_content(&post.content, mode),
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(image: Option<&str>, video: Option<&str>) -> Post {
        Post {
            id: 1,
            title: "Hello".to_string(),
            content: "<p>Hi</p>".to_string(),
            image_url: image.map(str::to_string),
            video_url: video.map(str::to_string),
        }
    }

    #[test]
    fn test_no_media_without_urls() {
        let card = PostCard::from_post(&post(None, None), ContentMode::Sanitized);
        assert!(card.media.is_empty());
    }

    #[test]
    fn test_empty_urls_count_as_absent() {
        let card = PostCard::from_post(&post(Some(""), Some("")), ContentMode::Sanitized);
        assert!(card.media.is_empty());
    }

    #[test]
    fn test_both_media_rendered() {
        let card = PostCard::from_post(
            &post(Some("https://cdn.test/a.png"), Some("https://cdn.test/v.mp4")),
            ContentMode::Sanitized,
        );
        assert_eq!(
            card.media,
            vec![
                MediaElement::Image {
                    src: "https://cdn.test/a.png".to_string()
                },
                MediaElement::Video {
                    src: "https://cdn.test/v.mp4".to_string(),
                    controls: true
                },
            ]
        );
        assert_eq!(card.media[1].label(), "[video ▶ controls] https://cdn.test/v.mp4");
    }

    #[test]
    fn test_raw_and_sanitized_bodies() {
        let raw = PostCard::from_post(&post(None, None), ContentMode::Raw);
        let clean = PostCard::from_post(&post(None, None), ContentMode::Sanitized);
        assert_eq!(raw.heading, "Hello");
        assert_eq!(raw.body, vec!["<p>Hi</p>"]);
        assert_eq!(clean.body, vec!["Hi"]);
    }

    #[test]
    fn test_title_and_urls_lose_control_characters() {
        let mut p = post(Some("a.png\u{1b}[2J"), None);
        p.title = "\u{1b}]0;pwned\u{7}Hello".to_string();

        let card = PostCard::from_post(&p, ContentMode::Raw);

        assert_eq!(card.heading, "]0;pwnedHello");
        assert_eq!(card.media[0].label(), "[image] a.png[2J");
    }
}
