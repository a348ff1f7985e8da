//! Message-to-reply dispatch
//!
//! Filters the bot's own messages, parses the command and routes it to a
//! registered handler. Handler failures stop here: they are logged and the
//! channel gets no reply.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{debug, error, info};
use serenity::model::id::UserId;
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use super::handlers::create_all_handlers;
use super::parser::CommandParser;
use super::registry::CommandRegistry;
use crate::core::{truncate_for_message, BotError, Config};
use crate::features::players::PlayerLookup;

pub struct CommandDispatcher {
    parser: CommandParser,
    registry: CommandRegistry,
    ctx: Arc<CommandContext>,
}

impl CommandDispatcher {
    pub fn new(parser: CommandParser, registry: CommandRegistry, ctx: CommandContext) -> Self {
        Self {
            parser,
            registry,
            ctx: Arc::new(ctx),
        }
    }

    /// Build the standard dispatcher around an optional player client
    pub fn from_config(
        config: &Config,
        players: Option<Arc<dyn PlayerLookup>>,
    ) -> Result<Self, BotError> {
        let parser = CommandParser::new(config.command_prefix)?;
        let registry = CommandRegistry::with_handlers(create_all_handlers(players.is_some()));
        let ctx = CommandContext::new(players, config.command_prefix);
        Ok(Self::new(parser, registry, ctx))
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handle a message event, returning the reply to send (if any)
    ///
    /// Messages written by `bot_id` are dropped before parsing.
    pub async fn on_message(
        &self,
        bot_id: UserId,
        author_id: UserId,
        content: &str,
    ) -> Option<String> {
        if author_id == bot_id {
            return None;
        }
        self.dispatch(content).await
    }

    /// Parse and run a command, returning the reply to send (if any)
    pub async fn dispatch(&self, content: &str) -> Option<String> {
        let command = self.parser.parse(content)?;
        let request_id = Uuid::new_v4();

        let Some(handler) = self.registry.get(&command.name) else {
            info!("[{request_id}] The command {content} was invalid");
            return None;
        };

        debug!(
            "[{request_id}] 🎯 Dispatching '{}' (args: '{}')",
            command.name, command.args
        );

        match handler.handle(Arc::clone(&self.ctx), &command).await {
            Ok(reply) => reply.map(|text| truncate_for_message(&text)),
            Err(e) => {
                error!("[{request_id}] ❌ Command '{}' failed: {e:#}", command.name);
                None
            }
        }
    }
}
