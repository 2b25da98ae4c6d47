//! The type coercion engine.
//!
//! Converts raw captured input from any layer (config file, command line, or
//! override syntax) into a typed [`Value`] according to an option's declared
//! [`Kind`]. The omission rules are per-kind and intentional: a name supplied
//! without a value sets booleans to `true`, optional scalars to unset, and
//! sequences to empty. A scalar that *does* carry a default rejects omission
//! instead of silently reverting to it.
//!
//! Coercion never mutates anything; failures carry the option name and the
//! offending text.

use crate::error::{OptionsError, Result};
use crate::types::{Kind, OptionDefinition, RawValue, Value};

/// Coerces one raw captured value into a typed [`Value`].
///
/// # Errors
///
/// Returns [`OptionsError::InvalidValue`] when the text does not parse for
/// the option's kind, when a non-sequence option receives accumulated
/// values, or when a value is omitted for a defaulted scalar.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionDefinition, RawValue, Value, coerce};
///
/// let verbose = OptionDefinition::boolean("ssl_insecure", false, "Skip verification");
/// assert_eq!(coerce(&verbose, &RawValue::Omitted)?, Value::Bool(true));
/// assert_eq!(coerce(&verbose, &RawValue::text("FALSE"))?, Value::Bool(false));
///
/// let scripts = OptionDefinition::sequence("scripts", "Execute a script");
/// assert_eq!(coerce(&scripts, &RawValue::Omitted)?, Value::Seq(vec![]));
/// # Ok::<(), option_schema_core::OptionsError>(())
/// ```
pub fn coerce(def: &OptionDefinition, raw: &RawValue) -> Result<Value> {
    match (def.kind(), raw) {
        (Kind::Bool, RawValue::Omitted) => Ok(Value::Bool(true)),
        (Kind::Bool, RawValue::Text(text)) => parse_bool(def, text),
        (Kind::Str, RawValue::Text(text)) => Ok(Value::Str(text.clone())),
        (Kind::Int, RawValue::Text(text)) => parse_int(def, text),
        (Kind::Str | Kind::Int, RawValue::Omitted) => omitted_scalar(def),
        (Kind::Seq, RawValue::Omitted) => Ok(Value::Seq(Vec::new())),
        (Kind::Seq, RawValue::Text(text)) => Ok(Value::Seq(vec![text.clone()])),
        (Kind::Seq, RawValue::List(items)) => Ok(Value::Seq(items.clone())),
        (_, RawValue::List(items)) => Err(OptionsError::InvalidValue {
            option: def.name().to_string(),
            value: items.join(", "),
            reason: format!("{} options take a single value", def.kind().label()),
        }),
    }
}

fn parse_bool(def: &OptionDefinition, text: &str) -> Result<Value> {
    match text.to_ascii_lowercase().as_str() {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Err(OptionsError::InvalidValue {
            option: def.name().to_string(),
            value: text.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_int(def: &OptionDefinition, text: &str) -> Result<Value> {
    text.parse::<i64>()
        .map(Value::Int)
        .map_err(|_| OptionsError::InvalidValue {
            option: def.name().to_string(),
            value: text.to_string(),
            reason: "expected a base-10 integer".to_string(),
        })
}

// Omission on a scalar means "clear to no value", which is only meaningful
// for options without a default.
fn omitted_scalar(def: &OptionDefinition) -> Result<Value> {
    if def.has_default() {
        Err(OptionsError::InvalidValue {
            option: def.name().to_string(),
            value: String::new(),
            reason: format!("{} option requires a value", def.kind().label()),
        })
    } else {
        Ok(Value::Unset)
    }
}
