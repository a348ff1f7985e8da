//! # Players Feature
//!
//! Brawl Stars player profile lookups over the official REST API.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true (`--disable-lookup`)
//!
//! ## Changelog
//! - 1.0.0: Initial release with typed profile decode and startup API check

pub mod client;
pub mod profile;

pub use client::{BrawlStarsClient, PlayerLookup, CHECK_TAG};
pub use profile::PlayerProfile;

#[cfg(test)]
pub mod fake;
