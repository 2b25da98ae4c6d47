//! Error types for schema construction, lookup, and type coercion.
//!
//! User and configuration errors (`UnknownOption`, `InvalidValue`) are never
//! retried; the caller is expected to report them and terminate. The
//! duplicate-flag variants are construction-time programming errors raised
//! before any user input is parsed.

use thiserror::Error;

/// Errors raised by the option schema core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Name does not resolve to any option in the schema.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Raw text failed coercion for the option's declared kind.
    #[error("invalid value for option {option}: {value:?} ({reason})")]
    InvalidValue {
        /// Canonical name of the offending option.
        option: String,
        /// The raw text as supplied (empty for an omitted value).
        value: String,
        /// What the coercion engine expected.
        reason: String,
    },

    /// Two definitions in one catalogue share a canonical name.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    /// Two options in one generated surface claim the same short flag.
    #[error("duplicate short flag -{short}: {option} collides with {existing}")]
    DuplicateShortFlag {
        /// The contested short alias.
        short: char,
        /// Option that attempted to register the alias.
        option: String,
        /// Option (or reserved flag) already holding it.
        existing: String,
    },
}

/// Convenience alias for results with [`OptionsError`].
pub type Result<T> = std::result::Result<T, OptionsError>;
