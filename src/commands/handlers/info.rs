//! Player info command handler
//!
//! Handles: info <player tag>
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::parser::Command;
use crate::core::format_player;

/// Handler for `info <tag>`
///
/// Looks the tag up through the context's player client and replies with the
/// three-line profile block. Lookup failures propagate to the dispatcher.
pub struct InfoHandler;

#[async_trait]
impl TextCommandHandler for InfoHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["info"]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, command: &Command) -> Result<Option<String>> {
        let players = ctx
            .players
            .as_ref()
            .ok_or_else(|| anyhow!("player lookup is disabled"))?;

        let tag = command.args.as_str();
        if tag.is_empty() {
            warn!("'{}' used without a player tag", command.name);
            return Ok(None);
        }

        let profile = players.fetch_player(tag).await?;
        info!(
            "📊 Player {tag}: {} ({} trophies)",
            profile.name, profile.trophies
        );
        Ok(Some(format_player(&profile)))
    }
}
