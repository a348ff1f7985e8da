//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::features::players::PlayerLookup;

/// Read-only state shared by every handler invocation
#[derive(Clone)]
pub struct CommandContext {
    /// `None` when player lookups are disabled
    pub players: Option<Arc<dyn PlayerLookup>>,
    pub command_prefix: char,
}

impl CommandContext {
    pub fn new(players: Option<Arc<dyn PlayerLookup>>, command_prefix: char) -> Self {
        Self {
            players,
            command_prefix,
        }
    }

    pub fn lookup_enabled(&self) -> bool {
        self.players.is_some()
    }
}
