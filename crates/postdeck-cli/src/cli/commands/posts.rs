//! One-shot post listing.

use std::io::{self, Write};

use anyhow::{Context, Result};
use postdeck_core::api::ApiClient;
use postdeck_core::card::PostCard;
use postdeck_core::config::ContentMode;
use postdeck_core::models::{Credential, Post};
use tracing::info;

pub async fn run(
    api: &ApiClient,
    credential: &Credential,
    mode: ContentMode,
    json: bool,
) -> Result<()> {
    let token = api.sign_in(credential).await?;
    let posts = api
        .get_posts(&token.access_token)
        .await
        .context("Failed to load posts")?;
    info!(count = posts.len(), "fetched posts");

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &posts).context("write posts as JSON")?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &posts, mode)?;
    }
    Ok(())
}

/// Plain-text listing: one block per post, separated by blank lines.
fn write_text(out: &mut impl Write, posts: &[Post], mode: ContentMode) -> Result<()> {
    if posts.is_empty() {
        writeln!(out, "No posts yet.")?;
        return Ok(());
    }
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let card = PostCard::from_post(post, mode);
        writeln!(out, "# {}", card.heading)?;
        for line in &card.body {
            writeln!(out, "{line}")?;
        }
        for element in &card.media {
            writeln!(out, "{}", element.label())?;
        }
    }
    Ok(())
}
