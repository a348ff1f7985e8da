//! Prefix command parser
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use regex::Regex;

use crate::core::BotError;

/// A command extracted from a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Word characters directly after the prefix, case preserved
    pub name: String,
    /// Remainder of the message, trimmed; empty when nothing follows
    pub args: String,
}

/// Matches `<prefix><word characters><anything>` at the start of a message
#[derive(Debug, Clone)]
pub struct CommandParser {
    pattern: Regex,
}

impl CommandParser {
    pub fn new(prefix: char) -> Result<Self, BotError> {
        let pattern = format!(r"^{}([A-Za-z0-9_]+)", regex::escape(&prefix.to_string()));
        let pattern = Regex::new(&pattern)
            .map_err(|e| BotError::ConfigInvalid(format!("command prefix {prefix:?}: {e}")))?;
        Ok(Self { pattern })
    }

    /// Parse `content`, returning `None` when it is not a command
    pub fn parse(&self, content: &str) -> Option<Command> {
        let name = self.pattern.captures(content)?.get(1)?;
        Some(Command {
            name: name.as_str().to_string(),
            args: content[name.end()..].trim().to_string(),
        })
    }
}
