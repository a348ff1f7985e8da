//! Startup sequencing ahead of the gateway connection
//!
//! Configuration is resolved first, then the players API is checked and the
//! dispatcher is built. A [`Session`] can only be opened from a
//! [`PreparedBot`], so any earlier failure ends startup before Discord is
//! contacted.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{info, warn};
use std::sync::Arc;

use crate::commands::CommandDispatcher;
use crate::core::{BotError, Cli, Config};
use crate::features::players::{BrawlStarsClient, PlayerLookup};
use crate::session::Session;

/// Resolved configuration waiting for the API check
pub struct Startup {
    config: Config,
    http: reqwest::Client,
}

impl Startup {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Resolve configuration from flags and `env`
    pub fn load<F>(cli: Cli, env: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Config::resolve(cli, env).map(Self::new)
    }

    /// Replace the HTTP client used for player lookups
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check the players API (when enabled) and build the dispatcher
    pub async fn prepare(self) -> Result<PreparedBot, BotError> {
        info!("Starting Brawl Stars Discord bot...");

        let players = BrawlStarsClient::from_config(&self.config)?
            .map(|client| client.with_http_client(self.http));
        match &players {
            Some(client) if self.config.api_check => {
                info!("Testing the players API...");
                client.check_api().await?;
            }
            Some(_) => info!("Skipping players API check"),
            None => warn!("Player lookup disabled - the info command is unavailable"),
        }

        let players = players.map(|client| Arc::new(client) as Arc<dyn PlayerLookup>);
        let dispatcher = CommandDispatcher::from_config(&self.config, players)?;
        info!(
            "Registered {} command names with prefix '{}'",
            dispatcher.registry().len(),
            self.config.command_prefix
        );

        Ok(PreparedBot {
            config: self.config,
            dispatcher,
        })
    }
}

/// Everything needed to open the gateway session
pub struct PreparedBot {
    config: Config,
    dispatcher: CommandDispatcher,
}

impl PreparedBot {
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Open the session and block until it ends
    pub async fn run(self) -> Result<(), BotError> {
        let session = Session::new(&self.config, self.dispatcher).await?;
        session.run().await
    }
}
