//! Register command placeholder
//!
//! Handles: r, register

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::parser::Command;

/// Accepts `r` / `register` and does nothing
///
/// Reserved so the names are not reported as unknown commands.
pub struct RegisterHandler;

#[async_trait]
impl TextCommandHandler for RegisterHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["r", "register"]
    }

    async fn handle(&self, _ctx: Arc<CommandContext>, command: &Command) -> Result<Option<String>> {
        debug!("Ignoring '{}' (player registration is not implemented)", command.name);
        Ok(None)
    }
}
