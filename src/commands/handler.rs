//! Text command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Handlers return the reply instead of sending it

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use super::parser::Command;

/// Trait for prefix command handlers
///
/// Each handler processes one or more command names. Handlers are registered
/// with a CommandRegistry and dispatched based on the parsed command name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         command: &Command,
///     ) -> Result<Option<String>> {
///         Ok(Some("Pong!".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// Aliases are listed as separate literal names.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// Returns the reply to send to the originating channel, or `None` to stay
    /// silent. Errors are logged by the dispatcher and never shown in channel.
    async fn handle(&self, ctx: Arc<CommandContext>, command: &Command) -> Result<Option<String>>;
}
