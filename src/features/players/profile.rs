//! Player profile returned by the players endpoint

use serde::Deserialize;

use crate::core::BotError;

/// The subset of a player profile the bot displays
///
/// Every field is required; unknown fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub trophies: u64,
    #[serde(rename = "3vs3Victories")]
    pub victories_3v3: u64,
}

impl PlayerProfile {
    /// Decode a response body, failing on missing or mistyped fields
    pub fn from_json(body: &str) -> Result<Self, BotError> {
        Ok(serde_json::from_str(body)?)
    }
}
