//! Option definition types for declarative option schemas.
//!
//! This module defines the data model shared by every layer of the system:
//! the value categories ([`Kind`]), resolved values ([`Value`]), raw captured
//! input ([`RawValue`]), and the option definitions themselves
//! ([`OptionDefinition`]). The types derive [`serde`] traits so catalogues
//! and snapshots round-trip through JSON and YAML.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value category of an option.
///
/// The kind drives both type coercion of raw input and the arity of the
/// generated command-line flag: booleans become zero-arity toggles,
/// sequences become repeatable single-value flags, scalars take one value.
///
/// # Examples
///
/// ```
/// use option_schema_core::Kind;
///
/// assert_eq!(Kind::Bool.label(), "boolean");
/// assert_eq!(Kind::Seq.label(), "sequence of strings");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// Boolean toggle.
    Bool,
    /// Free-form string.
    Str,
    /// Base-10 signed integer.
    Int,
    /// Ordered sequence of strings.
    Seq,
}

impl Kind {
    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Bool => "boolean",
            Kind::Str => "string",
            Kind::Int => "integer",
            Kind::Seq => "sequence of strings",
        }
    }
}

/// A resolved option value.
///
/// [`Value::Unset`] is the sentinel for "no value at all" on optional
/// scalars. It is distinct from the empty string, zero, and the empty
/// sequence, and serializes as `null`.
///
/// # Examples
///
/// ```
/// use option_schema_core::Value;
///
/// assert_eq!(serde_json::to_string(&Value::Int(8080)).unwrap(), "8080");
/// assert_eq!(serde_json::to_string(&Value::Unset).unwrap(), "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// String value.
    Str(String),
    /// Sequence of strings, in accumulation order.
    Seq(Vec<String>),
    /// No value (optional scalar left unset).
    Unset,
}

impl Value {
    /// Returns the kind this value belongs to, or `None` for [`Value::Unset`].
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Bool(_) => Some(Kind::Bool),
            Value::Int(_) => Some(Kind::Int),
            Value::Str(_) => Some(Kind::Str),
            Value::Seq(_) => Some(Kind::Seq),
            Value::Unset => None,
        }
    }

    /// Returns `true` for [`Value::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => write!(f, "[{}]", items.join(", ")),
            Value::Unset => f.write_str("(unset)"),
        }
    }
}

/// An uninterpreted value captured from one input source.
///
/// [`RawValue::Omitted`] is the absence-of-value marker: a bare zero-arity
/// toggle on the command line, or an override token without `=value`. The
/// coercion engine gives omission a kind-specific meaning (booleans become
/// `true`, optional scalars become unset, sequences become empty).
/// [`RawValue::List`] carries the accumulated occurrences of a repeatable
/// flag, in supplied order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Name supplied without a value.
    Omitted,
    /// A single literal text value, passed verbatim.
    Text(String),
    /// Accumulated values of a repeatable flag, in supplied order.
    List(Vec<String>),
}

impl RawValue {
    /// Convenience constructor for [`RawValue::Text`].
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }
}

/// One named, typed setting.
///
/// Definitions are created through the typed constructors ([`boolean`],
/// [`string`], [`integer`], [`sequence`], and the `optional_*` variants for
/// scalars without a default), so a kind/default mismatch is
/// unrepresentable. Names are kebab/underscore-insensitive and stored in
/// canonical underscore form.
///
/// [`boolean`]: OptionDefinition::boolean
/// [`string`]: OptionDefinition::string
/// [`integer`]: OptionDefinition::integer
/// [`sequence`]: OptionDefinition::sequence
///
/// # Examples
///
/// ```
/// use option_schema_core::{Kind, OptionDefinition, Value};
///
/// let port = OptionDefinition::integer("listen-port", 8080, "Proxy service port")
///     .with_short('p');
/// assert_eq!(port.name(), "listen_port");
/// assert_eq!(port.kind(), Kind::Int);
/// assert_eq!(port.default_value(), Value::Int(8080));
/// assert_eq!(port.short(), Some('p'));
///
/// let rfile = OptionDefinition::optional_string("rfile", "Read flows from file");
/// assert!(!rfile.has_default());
/// assert_eq!(rfile.default_value(), Value::Unset);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    name: String,
    kind: Kind,
    default: Option<Value>,
    help: String,
    short: Option<char>,
}

impl OptionDefinition {
    fn new(name: &str, kind: Kind, default: Option<Value>, help: &str) -> Self {
        Self {
            name: canonical_name(name),
            kind,
            default,
            help: help.to_string(),
            short: None,
        }
    }

    /// Creates a boolean option with an explicit default.
    pub fn boolean(name: &str, default: bool, help: &str) -> Self {
        Self::new(name, Kind::Bool, Some(Value::Bool(default)), help)
    }

    /// Creates a string option with a default value.
    pub fn string(name: &str, default: &str, help: &str) -> Self {
        Self::new(name, Kind::Str, Some(Value::Str(default.to_string())), help)
    }

    /// Creates a string option with no default.
    ///
    /// Omitting a value for such an option resolves it to [`Value::Unset`]
    /// rather than failing coercion.
    pub fn optional_string(name: &str, help: &str) -> Self {
        Self::new(name, Kind::Str, None, help)
    }

    /// Creates an integer option with a default value.
    pub fn integer(name: &str, default: i64, help: &str) -> Self {
        Self::new(name, Kind::Int, Some(Value::Int(default)), help)
    }

    /// Creates an integer option with no default.
    pub fn optional_integer(name: &str, help: &str) -> Self {
        Self::new(name, Kind::Int, None, help)
    }

    /// Creates a sequence-of-strings option. Sequences always default to the
    /// empty sequence.
    pub fn sequence(name: &str, help: &str) -> Self {
        Self::new(name, Kind::Seq, Some(Value::Seq(Vec::new())), help)
    }

    /// Attaches a single-character short alias for the generated flag.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Canonical (underscore) name, the map key everywhere.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Long flag name derived from the option name (`listen_port` →
    /// `listen-port`).
    pub fn flag_name(&self) -> String {
        self.name.replace('_', "-")
    }

    /// Declared value kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Help text, display-only.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Short alias, if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Returns `true` if the definition carries a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default the snapshot starts from: the declared default, or
    /// [`Value::Unset`] for optional scalars.
    pub fn default_value(&self) -> Value {
        self.default.clone().unwrap_or(Value::Unset)
    }
}

/// Normalizes a kebab/underscore-insensitive name to underscore form.
///
/// ```
/// use option_schema_core::canonical_name;
///
/// assert_eq!(canonical_name("listen-port"), "listen_port");
/// assert_eq!(canonical_name("listen_port"), "listen_port");
/// ```
pub fn canonical_name(name: &str) -> String {
    name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_constructors_pair_kind_and_default() {
        let def = OptionDefinition::boolean("anticache", false, "Strip cache headers");
        assert_eq!(def.kind(), Kind::Bool);
        assert_eq!(def.default_value(), Value::Bool(false));

        let def = OptionDefinition::sequence("scripts", "Execute a script");
        assert_eq!(def.kind(), Kind::Seq);
        assert_eq!(def.default_value(), Value::Seq(vec![]));
    }

    #[test]
    fn test_optional_scalars_have_no_default() {
        let def = OptionDefinition::optional_integer("body_size_limit", "Byte size limit");
        assert!(!def.has_default());
        assert_eq!(def.default_value(), Value::Unset);
    }

    #[test]
    fn test_names_are_canonicalized() {
        let def = OptionDefinition::string("listen-host", "", "Address to bind to");
        assert_eq!(def.name(), "listen_host");
        assert_eq!(def.flag_name(), "listen-host");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-1).to_string(), "-1");
        assert_eq!(Value::Str("regular".into()).to_string(), "regular");
        assert_eq!(
            Value::Seq(vec!["a.py".into(), "b.py".into()]).to_string(),
            "[a.py, b.py]"
        );
        assert_eq!(Value::Unset.to_string(), "(unset)");
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&Value::Seq(vec!["x".into()])).unwrap(),
            r#"["x"]"#
        );
        assert_eq!(serde_json::to_string(&Value::Unset).unwrap(), "null");
    }

    #[test]
    fn test_definition_round_trips_through_json() {
        let def = OptionDefinition::integer("listen_port", 8080, "Proxy service port")
            .with_short('p');
        let json = serde_json::to_string(&def).unwrap();
        let back: OptionDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
