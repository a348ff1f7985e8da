//! Process configuration
//!
//! Tokens come from the environment or from command-line flags. A set
//! environment variable always wins over the flag, even when it is empty.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use clap::Parser;

use super::error::BotError;

pub const BOT_TOKEN_ENV: &str = "DISCORD_STARS_TOKEN";
pub const API_TOKEN_ENV: &str = "BRAWL_STARS_API_TOKEN";
pub const API_URL_ENV: &str = "BRAWL_STARS_API_URL";
pub const PREFIX_ENV: &str = "COMMAND_PREFIX";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const DISABLE_LOOKUP_ENV: &str = "DISABLE_PLAYER_LOOKUP";

pub const DEFAULT_API_URL: &str = "https://api.brawlstars.com";
pub const DEFAULT_PREFIX: char = ';';
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line flags
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "bot", about = "Brawl Stars player lookup bot for Discord")]
pub struct Cli {
    /// Token found in https://discord.com/developers/applications/<bot_id>/bot
    #[arg(long)]
    pub token: Option<String>,

    /// Token obtained in the Brawl Stars developers portal
    #[arg(long = "apiToken")]
    pub api_token: Option<String>,

    /// Run without the `info` player lookup command
    #[arg(long)]
    pub disable_lookup: bool,

    /// Do not check the players API before connecting to Discord
    #[arg(long)]
    pub skip_api_check: bool,
}

/// Immutable configuration resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Present whenever `lookup_enabled` is true
    pub api_token: Option<String>,
    pub api_url: String,
    pub command_prefix: char,
    pub log_level: String,
    pub lookup_enabled: bool,
    pub api_check: bool,
}

impl Config {
    /// Resolve configuration from the process environment and parsed flags
    pub fn load(cli: Cli) -> Result<Self, BotError> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve configuration using `env` as the variable source
    pub fn resolve<F>(cli: Cli, env: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = env_or_flag(env(BOT_TOKEN_ENV), cli.token)
            .ok_or_else(|| BotError::ConfigMissing("discord token was not found".to_string()))?;

        let lookup_disabled = cli.disable_lookup
            || env(DISABLE_LOOKUP_ENV)
                .map(|v| parse_bool(&v))
                .unwrap_or(false);

        let api_token = env_or_flag(env(API_TOKEN_ENV), cli.api_token);
        if !lookup_disabled && api_token.is_none() {
            return Err(BotError::ConfigMissing(
                "brawl stars api token not found".to_string(),
            ));
        }

        let command_prefix = match env(PREFIX_ENV) {
            Some(raw) => parse_prefix(&raw)?,
            None => DEFAULT_PREFIX,
        };

        Ok(Self {
            discord_token,
            api_token,
            api_url: non_empty(env(API_URL_ENV)).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            command_prefix,
            log_level: non_empty(env(LOG_LEVEL_ENV))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            lookup_enabled: !lookup_disabled,
            api_check: !cli.skip_api_check && !lookup_disabled,
        })
    }
}

/// A set variable wins even when empty, leaving the value missing
fn env_or_flag(env: Option<String>, flag: Option<String>) -> Option<String> {
    match env {
        Some(value) => non_empty(Some(value)),
        None => non_empty(flag),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_prefix(raw: &str) -> Result<char, BotError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BotError::ConfigInvalid(format!(
            "{PREFIX_ENV} must be exactly one character, got {raw:?}"
        ))),
    }
}
