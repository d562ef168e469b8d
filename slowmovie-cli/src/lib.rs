// slowmovie-cli/src/lib.rs
//
// Library portion of the SlowMovie CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::play::{build_config, run_play};
