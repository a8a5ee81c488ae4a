//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use postdeck_core::api::ApiClient;
use postdeck_core::config::{self, Config, ContentMode};
use postdeck_core::logging;
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(version)]
#[command(about = "Log in to a posts backend and browse its feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend origin (overrides base_url from config)
    #[arg(long, global = true, env = "POSTDECK_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Show post markup verbatim instead of sanitized text
    #[arg(long, global = true)]
    raw_content: bool,
}

/// Where the password comes from for non-interactive commands.
#[derive(clap::Args, Debug, Clone)]
struct LoginArgs {
    /// Account username
    #[arg(short, long)]
    username: String,

    /// Account password
    #[arg(long, env = "POSTDECK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Read the password from the first line of stdin (takes precedence)
    #[arg(long)]
    password_stdin: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse,
    /// Log in, fetch the posts once and print them
    Posts {
        #[command(flatten)]
        login: LoginArgs,

        /// Print the posts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log in and report the issued token type
    Token {
        #[command(flatten)]
        login: LoginArgs,

        /// Also exchange the refresh cookie for a new token
        #[arg(long)]
        refresh: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

/// Settings after applying flag/env overrides on top of the config file.
struct Settings {
    base_url: String,
    content_mode: ContentMode,
    log_level: String,
}

impl Settings {
    fn resolve(base_url: Option<String>, raw_content: bool, config: Config) -> Self {
        Self {
            base_url: base_url.unwrap_or(config.base_url),
            content_mode: if raw_content {
                ContentMode::Raw
            } else {
                config.content_mode
            },
            log_level: config.log_level,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    // Config commands must work even when the file is broken.
    if let Commands::Config { command } = &command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = Config::load()
        .with_context(|| format!("load config from {}", config::paths::config_path().display()))?;
    let settings = Settings::resolve(cli.base_url, cli.raw_content, config);

    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&settings.log_level)?;
    debug!(base_url = %settings.base_url, mode = settings.content_mode.label(), "starting");

    let api = ApiClient::new(&settings.base_url)?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    match command {
        Commands::Browse => {
            let _enter = rt.enter();
            commands::browse::run(api, settings.content_mode)
        }
        Commands::Posts { login, json } => {
            let credential = commands::read_credential(&login)?;
            rt.block_on(commands::posts::run(
                &api,
                &credential,
                settings.content_mode,
                json,
            ))
        }
        Commands::Token { login, refresh } => {
            let credential = commands::read_credential(&login)?;
            rt.block_on(commands::token::run(&api, &credential, refresh))
        }
        // Dispatched above, before the config file is read.
        Commands::Config { .. } => Ok(()),
    }
}
