//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Players feature

pub mod players;

pub use players::{BrawlStarsClient, PlayerLookup, PlayerProfile};
