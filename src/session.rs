//! # Gateway Session
//!
//! Owns the single Discord gateway connection. The command dispatcher is
//! injected at construction and invoked once per message event; serenity may
//! run those invocations concurrently.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{error, info, warn};
use serenity::async_trait;
use serenity::client::bridge::gateway::ShardManager;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use crate::commands::CommandDispatcher;
use crate::core::{BotError, Config};

/// Connection lifecycle: `Disconnected → Connecting → Connected → Disconnected`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Shared view of the connection state
///
/// Cloned into the event handler and every [`ShutdownHandle`].
#[derive(Clone)]
pub struct SessionStatus {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStatus {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Disconnected)),
        }
    }

    pub async fn get(&self) -> SessionState {
        *self.state.read().await
    }

    pub(crate) async fn set(&self, state: SessionState) {
        *self.state.write().await = state;
    }

    /// Move to `Connected`, returning true only for the first Ready after connecting
    pub(crate) async fn mark_connected(&self) -> bool {
        let mut state = self.state.write().await;
        let first = *state == SessionState::Connecting;
        *state = SessionState::Connected;
        first
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Gateway intents needed to read prefix commands in guilds and DMs
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

struct Handler {
    dispatcher: Arc<CommandDispatcher>,
    status: SessionStatus,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user_id();
        let Some(reply) = self
            .dispatcher
            .on_message(bot_id, msg.author.id, &msg.content)
            .await
        else {
            return;
        };

        if let Err(why) = msg.channel_id.say(&ctx.http, reply).await {
            error!("Failed to send reply to channel {}: {why}", msg.channel_id);
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        let first_ready = self.status.mark_connected().await;

        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        if first_ready {
            println!("Bot is now running.  Press CTRL-C to exit.");
        }
    }
}

/// Requests a clean close of the gateway connection from any task
#[derive(Clone)]
pub struct ShutdownHandle {
    shard_manager: Arc<Mutex<ShardManager>>,
    status: SessionStatus,
}

impl ShutdownHandle {
    pub async fn state(&self) -> SessionState {
        self.status.get().await
    }

    pub async fn shutdown(&self) {
        info!("Closing gateway connection...");
        self.shard_manager.lock().await.shutdown_all().await;
    }
}

pub struct Session {
    client: Client,
    status: SessionStatus,
}

impl Session {
    /// Build the client; nothing is opened until [`Session::run`]
    pub async fn new(config: &Config, dispatcher: CommandDispatcher) -> Result<Self, BotError> {
        let status = SessionStatus::new();
        let handler = Handler {
            dispatcher: Arc::new(dispatcher),
            status: status.clone(),
        };

        let client = Client::builder(&config.discord_token, intents())
            .event_handler(handler)
            .await
            .map_err(|e| {
                error!("Failed to create Discord client: {e}");
                BotError::Connect(e)
            })?;

        Ok(Self { client, status })
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shard_manager: Arc::clone(&self.client.shard_manager),
            status: self.status.clone(),
        }
    }

    /// Connect and block until a termination signal or a shutdown request
    ///
    /// In-flight handler invocations are not drained.
    pub async fn run(mut self) -> Result<(), BotError> {
        let handle = self.shutdown_handle();
        tokio::spawn(async move {
            wait_for_shutdown_signal().await;
            info!("🛑 Termination signal received ({:?})", handle.state().await);
            handle.shutdown().await;
        });

        self.status.set(SessionState::Connecting).await;
        info!("Establishing WebSocket connection to Discord gateway...");
        info!("Gateway intents: {:?}", intents());

        let result = self.client.start().await;
        self.status.set(SessionState::Disconnected).await;

        if let Err(why) = result {
            error!("Gateway connection failed: {why:?}");
            return Err(BotError::Connect(why));
        }
        info!("Gateway connection closed");
        Ok(())
    }
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(e) => {
            warn!("Cannot listen for SIGTERM ({e}), waiting for CTRL-C only");
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for CTRL-C: {e}");
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for CTRL-C: {e}");
        std::future::pending::<()>().await;
    }
}
