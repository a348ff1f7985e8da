//! # Core Module
//!
//! Configuration, error kinds and reply formatting for the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::{Cli, Config};
pub use error::BotError;
pub use response::{format_help, format_player, truncate_for_message, MESSAGE_LIMIT};
