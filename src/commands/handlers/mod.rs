//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod help;
pub mod info;
pub mod register;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create the fixed set of command handlers
///
/// `info` is only included when player lookups are enabled.
pub fn create_all_handlers(lookup_enabled: bool) -> Vec<Arc<dyn TextCommandHandler>> {
    let mut handlers: Vec<Arc<dyn TextCommandHandler>> = vec![
        Arc::new(help::HelpHandler),
        Arc::new(register::RegisterHandler),
    ];
    if lookup_enabled {
        handlers.push(Arc::new(info::InfoHandler));
    }
    handlers
}
