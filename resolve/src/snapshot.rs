//! The resolved settings snapshot.

use std::collections::HashMap;

use option_schema_core::{Value, canonical_name};

use crate::error::Result;

/// Immutable mapping from option name to resolved value.
///
/// Built exactly once per process by [`resolve`](crate::resolve); there is
/// no mutation API, so a snapshot can be shared by reference across any
/// number of worker threads without synchronization. Entries follow schema
/// declaration order, and every option in the active subset has exactly one
/// entry.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionDefinition, OptionSchema};
/// use option_schema_resolve::{Layer, Origin, resolve};
///
/// let schema = OptionSchema::from_definitions([
///     OptionDefinition::integer("listen_port", 8080, "Proxy service port"),
/// ]).unwrap();
///
/// let snapshot = resolve(
///     &schema,
///     &Layer::new(Origin::File),
///     &Layer::new(Origin::Cli),
///     &[],
/// )?;
/// assert_eq!(snapshot.get_int("listen-port"), Some(8080));
/// # Ok::<(), option_schema_resolve::ResolveError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSnapshot {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl SettingsSnapshot {
    pub(crate) fn new(entries: Vec<(String, Value)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Looks up a resolved value (kebab/underscore-insensitive).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index
            .get(&canonical_name(name))
            .map(|&i| &self.entries[i].1)
    }

    /// Resolved boolean, or `None` if absent or of another kind.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Resolved integer, or `None` if absent, unset, or of another kind.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Resolved string, or `None` if absent, unset, or of another kind.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Resolved sequence, or `None` if absent or of another kind.
    pub fn get_seq(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            Value::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Iterates `(name, value)` pairs in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of resolved options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the active subset was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the full snapshot as a YAML mapping in declaration order,
    /// with unset scalars as null. Backs the `--options` dump.
    pub fn to_yaml(&self) -> Result<String> {
        let mut mapping = serde_yaml::Mapping::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            mapping.insert(
                serde_yaml::Value::String(name.clone()),
                serde_yaml::to_value(value)?,
            );
        }
        Ok(serde_yaml::to_string(&mapping)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SettingsSnapshot {
        SettingsSnapshot::new(vec![
            ("mode".to_string(), Value::Str("regular".to_string())),
            ("listen_port".to_string(), Value::Int(8080)),
            ("rfile".to_string(), Value::Unset),
            (
                "scripts".to_string(),
                Value::Seq(vec!["one.py".to_string()]),
            ),
        ])
    }

    #[test]
    fn test_typed_accessors() {
        let snapshot = sample();
        assert_eq!(snapshot.get_str("mode"), Some("regular"));
        assert_eq!(snapshot.get_int("listen_port"), Some(8080));
        assert_eq!(snapshot.get_seq("scripts"), Some(&["one.py".to_string()][..]));
        // Unset is not a string.
        assert_eq!(snapshot.get_str("rfile"), None);
        assert_eq!(snapshot.get("rfile"), Some(&Value::Unset));
    }

    #[test]
    fn test_lookup_is_dash_underscore_insensitive() {
        let snapshot = sample();
        assert_eq!(snapshot.get_int("listen-port"), Some(8080));
    }

    #[test]
    fn test_yaml_dump_keeps_declaration_order() {
        let dump = sample().to_yaml().unwrap();
        assert_eq!(
            dump,
            "mode: regular\nlisten_port: 8080\nrfile: null\nscripts:\n- one.py\n"
        );
    }
}
