//! HTTP client for the posts backend.
//!
//! One shared `reqwest::Client` with a cookie store, so the httpOnly refresh
//! cookie set by `/login` is sent back on `/refresh`. Each call is exactly one
//! round-trip: no retries, no caching, transport-default timeouts.

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use tracing::{debug, warn};
use url::Url;

use crate::models::{Credential, Post, Token};

const LOGIN_PATH: &str = "login";
const REFRESH_PATH: &str = "refresh";
const POSTS_PATH: &str = "posts";

/// Shown for every failed login, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

const USER_AGENT: &str = concat!("postdeck/", env!("CARGO_PKG_VERSION"));

/// Client for the three backend operations: login, refresh, list posts.
///
/// Cloning is cheap and clones share the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Base URL cannot be used as a base: {base_url}");
        }
        // Keep any path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchanges a credential for a bearer token.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-2xx status or a malformed body.
    pub async fn login(&self, credential: &Credential) -> Result<Token> {
        let response = self
            .request(Method::POST, LOGIN_PATH)?
            .json(credential)
            .send()
            .await
            .context("Failed to send login request")?;

        let response = ensure_success(response, "Login").await?;
        response
            .json::<Token>()
            .await
            .context("Failed to parse login response")
    }

    /// Logs in and insists on a usable token.
    ///
    /// Any failure, including a success response with an empty access token,
    /// surfaces with [`LOGIN_FAILED_MESSAGE`] as the outermost context.
    ///
    /// # Errors
    /// Returns an error whenever no non-empty token was obtained.
    pub async fn sign_in(&self, credential: &Credential) -> Result<Token> {
        let token = self
            .login(credential)
            .await
            .context(LOGIN_FAILED_MESSAGE)?;
        if token.access_token.is_empty() {
            warn!("login returned an empty access token");
            anyhow::bail!(LOGIN_FAILED_MESSAGE);
        }
        Ok(token)
    }

    /// Obtains a fresh token using the refresh cookie from a previous login.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-2xx status or a malformed body.
    pub async fn refresh_token(&self) -> Result<Token> {
        let response = self
            .request(Method::POST, REFRESH_PATH)?
            .send()
            .await
            .context("Failed to send token refresh request")?;

        let response = ensure_success(response, "Token refresh").await?;
        response
            .json::<Token>()
            .await
            .context("Failed to parse token refresh response")
    }

    /// Fetches the post list, authorized with `token`.
    ///
    /// # Errors
    /// Returns an error if `token` is empty, on transport failure, a non-2xx
    /// status or a malformed body.
    pub async fn get_posts(&self, token: &str) -> Result<Vec<Post>> {
        if token.is_empty() {
            anyhow::bail!("Refusing to fetch posts without a token");
        }

        let response = self
            .request(Method::GET, POSTS_PATH)?
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .context("Failed to send posts request")?;

        let response = ensure_success(response, "Fetching posts").await?;
        response
            .json::<Vec<Post>>()
            .await
            .context("Failed to parse posts response")
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for /{path}"))
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self.endpoint(path)?;
        debug!(method = method.as_str(), url = url.as_str(), "sending request");
        Ok(self.http.request(method, url))
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!(%status, operation, "request failed");
    anyhow::bail!("{operation} failed (HTTP {status}): {body}");
}
