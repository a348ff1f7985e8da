// Core layer - configuration, errors and reply formatting
pub mod core;

// Features layer - external data sources
pub mod features;

// Application layer
pub mod commands;

// Gateway session lifecycle
pub mod session;

// Startup sequencing
pub mod app;

pub use crate::core::{BotError, Cli, Config};

pub use app::{PreparedBot, Startup};
pub use commands::CommandDispatcher;
pub use features::players::{BrawlStarsClient, PlayerLookup, PlayerProfile};
pub use session::{Session, SessionState, SessionStatus, ShutdownHandle};
