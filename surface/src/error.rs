//! Error types for surface generation and argument parsing.

use thiserror::Error;

use option_schema_core::OptionsError;

/// Errors raised while building a command surface or parsing arguments
/// against it.
///
/// This crate produces the diagnostic *content*; exit-code conventions are
/// the host's concern. Following clap's own model, a help request surfaces
/// through the error path with the rendered text as payload.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The user asked for help; the payload is the rendered help text.
    #[error("{0}")]
    Help(String),

    /// Unrecognized flag or malformed invocation; the message names the
    /// offending token.
    #[error("{0}")]
    Usage(String),

    /// Schema lookup or duplicate-flag failure while building the surface.
    #[error(transparent)]
    Schema(#[from] OptionsError),

    /// A schema option collides with one of the always-present flags
    /// (`--version`, `--conf`, `--set`, …).
    #[error("option {0} collides with a reserved flag")]
    ReservedOption(String),
}

/// Convenience alias for results with [`SurfaceError`].
pub type Result<T> = std::result::Result<T, SurfaceError>;
