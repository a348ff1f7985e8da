//! In-memory `PlayerLookup` for unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{PlayerLookup, PlayerProfile};
use crate::core::BotError;

/// Serves fixed profiles; unknown tags fail with a 404 `LookupFailed`
#[derive(Default)]
pub struct FakePlayers {
    profiles: HashMap<String, PlayerProfile>,
    requested: Mutex<Vec<String>>,
}

impl FakePlayers {
    pub fn with_player(mut self, tag: &str, name: &str, trophies: u64, victories_3v3: u64) -> Self {
        self.profiles.insert(
            tag.to_string(),
            PlayerProfile {
                name: name.to_string(),
                trophies,
                victories_3v3,
            },
        );
        self
    }

    /// Tags requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PlayerLookup for FakePlayers {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile, BotError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(tag.to_string());
        }
        self.profiles
            .get(tag)
            .cloned()
            .ok_or_else(|| BotError::LookupFailed {
                tag: tag.to_string(),
                status: 404,
            })
    }
}
