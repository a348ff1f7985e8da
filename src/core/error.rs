//! Error types shared across the bot
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial error kinds for startup, gateway and player lookups

use thiserror::Error;

/// Errors raised by the bot
///
/// Startup errors (`ConfigMissing`, `ConfigInvalid`, `ApiCheck`, `Connect`) are
/// fatal. Lookup errors (`LookupFailed`, `Transport`, `DecodeFailed`) are
/// recovered at the dispatcher and only logged.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("{0}")]
    ConfigMissing(String),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("the api returned status code {status}")]
    ApiCheck { status: u16 },

    #[error("gateway connection failed: {0}")]
    Connect(#[from] serenity::Error),

    #[error("player with tag {tag} not found (status {status})")]
    LookupFailed { tag: String, status: u16 },

    #[error("players API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed player data: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failed_message_names_tag() {
        let err = BotError::LookupFailed {
            tag: "#ABC123".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "player with tag #ABC123 not found (status 404)");
    }

    #[test]
    fn test_api_check_message() {
        assert_eq!(
            BotError::ApiCheck { status: 403 }.to_string(),
            "the api returned status code 403"
        );
    }

    #[test]
    fn test_decode_failure_converts() {
        let err = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        assert!(matches!(BotError::from(err), BotError::DecodeFailed(_)));
    }
}
