pub mod browse;
pub mod config;
pub mod posts;
pub mod token;

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use postdeck_core::models::Credential;

use super::LoginArgs;

/// Builds the credential for a non-interactive command.
///
/// `--password-stdin` wins over `--password` / `POSTDECK_PASSWORD`.
pub(super) fn read_credential(args: &LoginArgs) -> Result<Credential> {
    let password = if args.password_stdin {
        read_password_line(io::stdin().lock())?
    } else if let Some(password) = &args.password {
        password.clone()
    } else {
        bail!("No password given. Set POSTDECK_PASSWORD or pass --password-stdin.");
    };
    Ok(Credential::new(args.username.clone(), password))
}

fn read_password_line(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
