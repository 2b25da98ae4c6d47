//! Configuration file decoding.
//!
//! Decodes a YAML mapping of option names to values into a file [`Layer`].
//! File values are always explicit: the override syntax's omission
//! convention does not exist in this layer, so null is rejected rather than
//! treated as "unset". Unknown option names are *not* checked here — they
//! surface as `UnknownOption` when the resolver applies the layer.
//!
//! # Example document
//!
//! ```yaml
//! listen_host: 127.0.0.1
//! listen_port: 9090
//! ssl_insecure: true
//! scripts:
//!   - one.py
//!   - two.py
//! ```

use std::path::Path;

use option_schema_core::RawValue;

use crate::error::{ResolveError, Result};
use crate::layer::{Layer, Origin};

/// Reads and decodes a configuration document from disk.
///
/// # Errors
///
/// Returns [`ResolveError::Io`] if the file cannot be read, and any error
/// [`file_layer_from_str`] produces.
pub fn load_file_layer(path: impl AsRef<Path>) -> Result<Layer> {
    let text = std::fs::read_to_string(path)?;
    file_layer_from_str(&text)
}

/// Decodes a YAML document into a file layer.
///
/// Scalars (strings, integers, booleans) become single text values;
/// sequences of scalars become accumulated lists. An empty document yields
/// an empty layer.
///
/// # Errors
///
/// Returns [`ResolveError::Yaml`] on malformed YAML,
/// [`ResolveError::InvalidDocument`] when the document is not a mapping
/// with string keys, and [`ResolveError::UnsupportedFileValue`] for value
/// shapes that cannot be coerced (null, floats, nested collections).
///
/// # Examples
///
/// ```
/// use option_schema_resolve::file_layer_from_str;
///
/// let layer = file_layer_from_str("listen_port: 9090\nssl_insecure: true\n")?;
/// assert_eq!(layer.len(), 2);
///
/// assert!(file_layer_from_str("listen_host: null").is_err());
/// # Ok::<(), option_schema_resolve::ResolveError>(())
/// ```
pub fn file_layer_from_str(text: &str) -> Result<Layer> {
    if text.trim().is_empty() {
        return Ok(Layer::new(Origin::File));
    }
    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
    let mut layer = Layer::new(Origin::File);

    let mapping = match doc {
        serde_yaml::Value::Null => return Ok(layer),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(ResolveError::InvalidDocument(
                "expected a mapping of option names to values".to_string(),
            ));
        }
    };

    for (key, value) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| {
                ResolveError::InvalidDocument("option names must be strings".to_string())
            })?
            .to_string();
        let raw = decode_value(&name, value)?;
        layer.push(name, raw);
    }

    Ok(layer)
}

fn decode_value(name: &str, value: serde_yaml::Value) -> Result<RawValue> {
    match value {
        serde_yaml::Value::Bool(b) => Ok(RawValue::Text(b.to_string())),
        serde_yaml::Value::Number(n) if n.is_i64() => Ok(RawValue::Text(n.to_string())),
        serde_yaml::Value::String(s) => Ok(RawValue::Text(s)),
        serde_yaml::Value::Sequence(items) => {
            let mut texts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_yaml::Value::String(s) => texts.push(s),
                    serde_yaml::Value::Bool(b) => texts.push(b.to_string()),
                    serde_yaml::Value::Number(n) if n.is_i64() => texts.push(n.to_string()),
                    _ => {
                        return Err(ResolveError::UnsupportedFileValue {
                            option: name.to_string(),
                        });
                    }
                }
            }
            Ok(RawValue::List(texts))
        }
        _ => Err(ResolveError::UnsupportedFileValue {
            option: name.to_string(),
        }),
    }
}
