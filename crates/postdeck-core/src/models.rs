//! Wire types shared by the client, the TUI and the CLI.
//!
//! Secrets (password, access token) are never printed in full: the `Debug`
//! impls below redact them so they cannot leak through `tracing` fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username/password pair submitted once to obtain a [`Token`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token scheme. The backend only ever issues bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Bearer,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Bearer => f.write_str("bearer"),
        }
    }
}

/// Access token returned by `/login` and `/refresh`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Some backends omit this field; it is always bearer.
    #[serde(default)]
    pub token_type: TokenType,
}

impl Token {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: TokenType::Bearer,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &redact(&self.access_token))
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// A single post from `/posts`.
///
/// Media fields use the camelCase wire names; snake_case is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// May contain HTML markup.
    pub content: String,
    #[serde(
        default,
        rename = "imageUrl",
        alias = "image_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        rename = "videoUrl",
        alias = "video_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_url: Option<String>,
}

impl Post {
    /// Image URL, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Video URL, treating an empty string as absent.
    pub fn video(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Shows only the first few characters of a secret.
pub fn redact(secret: &str) -> String {
    const VISIBLE: usize = 4;
    if secret.chars().count() <= VISIBLE * 2 {
        return "***".to_string();
    }
    let head: String = secret.chars().take(VISIBLE).collect();
    format!("{head}***")
}
