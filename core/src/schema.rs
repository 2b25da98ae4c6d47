//! The option registry.
//!
//! An [`OptionSchema`] is built once, atomically, from an ordered catalogue
//! of definitions, and is immutable afterwards. Iteration follows the
//! catalogue's declaration order so that generated help output and flag
//! ordering are reproducible run to run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};
use crate::types::{OptionDefinition, canonical_name};

/// Immutable registry of option definitions.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionDefinition, OptionSchema};
///
/// let schema = OptionSchema::from_definitions([
///     OptionDefinition::string("mode", "regular", "Proxy mode"),
///     OptionDefinition::integer("listen_port", 8080, "Proxy service port"),
/// ])?;
///
/// assert_eq!(schema.len(), 2);
/// // Lookups are kebab/underscore-insensitive.
/// assert_eq!(schema.lookup("listen-port")?.name(), "listen_port");
/// assert!(schema.lookup("nonexistent").is_err());
/// # Ok::<(), option_schema_core::OptionsError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptionDefinition>", into = "Vec<OptionDefinition>")]
pub struct OptionSchema {
    defs: Vec<OptionDefinition>,
    index: HashMap<String, usize>,
}

impl OptionSchema {
    /// Builds a schema from an ordered catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::DuplicateOption`] if two definitions share a
    /// canonical name. Nothing is kept on failure.
    pub fn from_definitions(defs: impl IntoIterator<Item = OptionDefinition>) -> Result<Self> {
        let mut schema = Self {
            defs: Vec::new(),
            index: HashMap::new(),
        };
        for def in defs {
            let key = def.name().to_string();
            if schema.index.insert(key, schema.defs.len()).is_some() {
                return Err(OptionsError::DuplicateOption(def.name().to_string()));
            }
            schema.defs.push(def);
        }
        Ok(schema)
    }

    /// Looks up a definition by name (kebab/underscore-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownOption`] if the name is absent.
    pub fn lookup(&self, name: &str) -> Result<&OptionDefinition> {
        self.index
            .get(&canonical_name(name))
            .map(|&i| &self.defs[i])
            .ok_or_else(|| OptionsError::UnknownOption(name.to_string()))
    }

    /// Returns `true` if `name` resolves to a definition.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_name(name))
    }

    /// Iterates all definitions in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.defs.iter()
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if the schema holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl TryFrom<Vec<OptionDefinition>> for OptionSchema {
    type Error = OptionsError;

    fn try_from(defs: Vec<OptionDefinition>) -> Result<Self> {
        Self::from_definitions(defs)
    }
}

impl From<OptionSchema> for Vec<OptionDefinition> {
    fn from(schema: OptionSchema) -> Self {
        schema.defs
    }
}
