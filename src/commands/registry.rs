//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for prefix command dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Registry mapping command names to handlers
///
/// Lookups are exact and case-sensitive. Multiple command names can map to the
/// same handler, which is how short aliases such as `h` are provided.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(HelpHandler));
///
/// if let Some(handler) = registry.get("h") {
///     let reply = handler.handle(ctx, &command).await?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn TextCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry populated with the given handlers
    pub fn with_handlers(handlers: Vec<Arc<dyn TextCommandHandler>>) -> Self {
        let mut registry = Self::new();
        for handler in handlers {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for its declared command names
    ///
    /// The handler is registered for all names returned by `command_names()`.
    pub fn register(&mut self, handler: Arc<dyn TextCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    ///
    /// Returns None if no handler is registered for the given name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn TextCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get all registered command names
    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use crate::commands::parser::Command;
    use anyhow::Result;
    use async_trait::async_trait;

    struct MockHandler {
        names: &'static [&'static str],
    }

    #[async_trait]
    impl TextCommandHandler for MockHandler {
        fn command_names(&self) -> &'static [&'static str] {
            self.names
        }

        async fn handle(
            &self,
            _ctx: Arc<CommandContext>,
            command: &Command,
        ) -> Result<Option<String>> {
            Ok(Some(command.name.clone()))
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_single() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler { names: &["info"] }));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("info"));
        assert!(!registry.contains("inf"));
    }

    #[test]
    fn test_registry_aliases_share_handler() {
        let registry = CommandRegistry::with_handlers(vec![Arc::new(MockHandler {
            names: &["h", "help"],
        })]);

        assert_eq!(registry.len(), 2);
        let short = registry.get("h").unwrap();
        let long = registry.get("help").unwrap();
        assert!(Arc::ptr_eq(&short, &long));
    }

    #[test]
    fn test_registry_lookup_is_case_sensitive() {
        let registry = CommandRegistry::with_handlers(vec![Arc::new(MockHandler {
            names: &["help"],
        })]);

        assert!(registry.get("help").is_some());
        assert!(registry.get("Help").is_none());
        assert!(registry.get("hel").is_none());
    }

    #[test]
    fn test_registry_command_names() {
        let registry = CommandRegistry::with_handlers(vec![
            Arc::new(MockHandler { names: &["h", "help"] }),
            Arc::new(MockHandler { names: &["info"] }),
        ]);

        let mut names: Vec<&str> = registry.command_names().copied().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["h", "help", "info"]);
    }

    #[test]
    fn test_registry_default() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
    }
}
