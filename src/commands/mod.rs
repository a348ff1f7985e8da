//! # Command System
//!
//! Prefix (`;`) text command parsing and dispatch.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod parser;
pub mod registry;

pub use context::CommandContext;
pub use dispatcher::CommandDispatcher;
pub use handler::TextCommandHandler;
pub use parser::{Command, CommandParser};
pub use registry::CommandRegistry;
