//! Origin-tagged raw value layers.
//!
//! A [`Layer`] is an ordered collection of `(name, raw value)` entries
//! captured from one input source. Entry order is preserved because the
//! resolver applies entries in the order they were supplied; layers are
//! transient and discarded after resolution.

use std::fmt;

use option_schema_core::RawValue;

/// Input source a raw value was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The configuration document.
    File,
    /// Flags captured by the generated command-line parser.
    Cli,
    /// `--set name[=value]` override tokens.
    Override,
}

impl Origin {
    /// Label used in layer-tagged diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Origin::File => "file",
            Origin::Cli => "cli",
            Origin::Override => "override",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered collection of raw values captured from one source.
///
/// # Examples
///
/// ```
/// use option_schema_core::RawValue;
/// use option_schema_resolve::{Layer, Origin};
///
/// let mut layer = Layer::new(Origin::Cli);
/// layer.push("listen_port", RawValue::text("443"));
/// layer.push("scripts", RawValue::List(vec!["a.py".into(), "b.py".into()]));
///
/// assert_eq!(layer.len(), 2);
/// assert_eq!(layer.origin(), Origin::Cli);
/// ```
#[derive(Debug, Clone)]
pub struct Layer {
    origin: Origin,
    entries: Vec<(String, RawValue)>,
}

impl Layer {
    /// Creates an empty layer for the given origin.
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            entries: Vec::new(),
        }
    }

    /// Appends one captured entry. Order of insertion is order of
    /// application.
    pub fn push(&mut self, name: impl Into<String>, raw: RawValue) {
        self.entries.push((name.into(), raw));
    }

    /// The source this layer was captured from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(name, raw)| (name.as_str(), raw))
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was captured from this source.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
