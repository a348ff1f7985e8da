//! Help command handler
//!
//! Handles: h, help

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::parser::Command;
use crate::core::format_help;

/// Handler for `h` / `help`; any trailing text is ignored
pub struct HelpHandler;

#[async_trait]
impl TextCommandHandler for HelpHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["h", "help"]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, _command: &Command) -> Result<Option<String>> {
        Ok(Some(format_help(ctx.command_prefix, ctx.lookup_enabled())))
    }
}
