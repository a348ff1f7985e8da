//! Reply formatting and Discord message utilities
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Help and player templates, message limit truncation

use crate::features::players::PlayerProfile;

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Render the usage block listing every recognized command
///
/// The `info` line is left out when player lookups are disabled.
pub fn format_help(prefix: char, lookup_enabled: bool) -> String {
    let mut help = format!(
        "```\n\
         Usage of this bot (all commands are preceded by \"{prefix}\"):\n\
         \t- {prefix}h[elp]: Display this message.\n"
    );
    if lookup_enabled {
        help.push_str(&format!(
            "\t- {prefix}info <player tag>: Display data about a player with tag <player tag>. \
             If no tag is provided, or there isn't any player with it, no data will be shown.\n"
        ));
    }
    help.push_str("```");
    help
}

/// Render a player profile as a three-line code block
pub fn format_player(profile: &PlayerProfile) -> String {
    format!(
        "```\nPlayer name: {}\nTrophies: {}\nVictories: {}\n```",
        profile.name, profile.trophies, profile.victories_3v3
    )
}

/// Truncate text to fit message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        text.to_string()
    } else {
        // Find a safe UTF-8 boundary
        let mut end = MESSAGE_LIMIT - 3;
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
