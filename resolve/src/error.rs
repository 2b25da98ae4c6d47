//! Error types for layered configuration resolution.
//!
//! Schema and coercion failures are tagged with the layer they originated
//! from so diagnostics can name both the option and the input source.

use thiserror::Error;

use option_schema_core::OptionsError;

use crate::layer::Origin;

/// Errors that can occur while decoding or resolving configuration layers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A schema lookup or coercion failure, tagged with its source layer.
    #[error("{layer} layer: {source}")]
    Layer {
        /// The input source the failing entry came from.
        layer: Origin,
        /// The underlying schema/coercion error.
        #[source]
        source: OptionsError,
    },

    /// File I/O failure reading a configuration document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration document is not a mapping of option names to values.
    #[error("invalid configuration document: {0}")]
    InvalidDocument(String),

    /// A configuration file value has a shape that cannot be coerced
    /// (null, float, nested mapping).
    #[error("unsupported value for option {option} in configuration file")]
    UnsupportedFileValue {
        /// Name of the offending entry as written in the document.
        option: String,
    },
}

impl ResolveError {
    /// Tags a core error with the layer it surfaced in.
    pub(crate) fn in_layer(layer: Origin, source: OptionsError) -> Self {
        ResolveError::Layer { layer, source }
    }
}

/// Convenience alias for results with [`ResolveError`].
pub type Result<T> = std::result::Result<T, ResolveError>;
