//! Token exchange check. Never prints the token itself.

use anyhow::{Context, Result};
use postdeck_core::api::ApiClient;
use postdeck_core::models::Credential;

pub async fn run(api: &ApiClient, credential: &Credential, refresh: bool) -> Result<()> {
    let token = api.sign_in(credential).await?;
    println!("Logged in as {} (token type: {})", credential.username, token.token_type);

    if refresh {
        let refreshed = api
            .refresh_token()
            .await
            .context("Failed to refresh token")?;
        println!("Refreshed token (token type: {})", refreshed.token_type);
    }
    Ok(())
}
