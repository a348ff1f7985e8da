//! HTTP client for the players endpoint
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Single authenticated GET per lookup, no retries or caching

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

use super::profile::PlayerProfile;
use crate::core::{BotError, Config};

/// Tag of a known player, requested once at startup to verify the API token
pub const CHECK_TAG: &str = "#9UG88U0RJ";

/// Source of player profiles
///
/// Implemented by [`BrawlStarsClient`]; command handlers only see this trait
/// so they can be exercised without network access.
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile, BotError>;
}

/// Client for `GET <base>/v1/players/<tag>`
#[derive(Clone, Debug)]
pub struct BrawlStarsClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl BrawlStarsClient {
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self, BotError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BotError::ConfigInvalid(format!("invalid API url {base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(BotError::ConfigInvalid(format!(
                "API url {base_url:?} cannot carry a path"
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed,
            api_token: api_token.into(),
        })
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS or timeout settings)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Build a client when player lookups are enabled
    pub fn from_config(config: &Config) -> Result<Option<Self>, BotError> {
        if !config.lookup_enabled {
            return Ok(None);
        }
        let token = config
            .api_token
            .as_deref()
            .ok_or_else(|| BotError::ConfigMissing("brawl stars api token not found".to_string()))?;
        Self::new(&config.api_url, token).map(Some)
    }

    /// Endpoint for `tag`, escaped as a single path segment
    pub fn player_url(&self, tag: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v1", "players", tag]);
        }
        url
    }

    /// Request the known check player and require a 200 response
    pub async fn check_api(&self) -> Result<(), BotError> {
        let response = self.get(self.player_url(CHECK_TAG)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::ApiCheck {
                status: status.as_u16(),
            });
        }
        info!("✅ Players API reachable ({status})");
        Ok(())
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, BotError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl PlayerLookup for BrawlStarsClient {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile, BotError> {
        let response = self.get(self.player_url(tag)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::LookupFailed {
                tag: tag.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Player {tag}: {} byte response", body.len());
        PlayerProfile::from_json(&body)
    }
}
