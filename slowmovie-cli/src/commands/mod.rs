//! Command implementations for the CLI.

/// Module containing the implementation of the playback run.
/// Builds the configuration, prints the banner and drives the player.
pub mod play;
