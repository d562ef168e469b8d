// ============================================================================
// slowmovie-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type; this module only adds a result alias
// and a way to prefix errors with what the CLI was doing at the time.

// ---- Internal crate imports ----
use slowmovie_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
///
/// Configuration errors pass through untouched so validation messages reach
/// the user exactly as the core wrote them.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| match e.into() {
            err @ CoreError::InvalidConfig(_) => err,
            err => CoreError::OperationFailed(format!("{}: {}", context, err)),
        })
    }
}
