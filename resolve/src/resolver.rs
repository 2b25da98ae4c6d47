//! The configuration resolver.
//!
//! Merges defaults, file-sourced values, CLI-sourced values, and override
//! tokens into one immutable [`SettingsSnapshot`]. Precedence is fixed:
//! defaults < file < CLI flags < overrides. Overrides always win, which
//! gives every option a uniform programmatic reset path regardless of how
//! esoteric its dedicated flag syntax is.
//!
//! Resolution is atomic: any failure in any layer aborts the whole run and
//! no partial snapshot is ever returned.

use std::collections::HashMap;

use tracing::debug;

use option_schema_core::{Kind, OptionSchema, RawValue, Value, coerce};

use crate::error::{ResolveError, Result};
use crate::layer::{Layer, Origin};
use crate::setspec::SetSpec;
use crate::snapshot::SettingsSnapshot;

/// Resolves the three input layers against a schema into a settings
/// snapshot.
///
/// The file and CLI layers are applied in that order, each entry coerced
/// and overwriting the entry before it. Override tokens are then applied
/// strictly left-to-right: scalars replace, sequence omissions empty the
/// sequence, and valued sequence tokens append to it.
///
/// # Errors
///
/// Returns [`ResolveError::Layer`] naming the originating layer for any
/// unknown option or coercion failure.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionDefinition, OptionSchema, RawValue};
/// use option_schema_resolve::{Layer, Origin, resolve};
///
/// let schema = OptionSchema::from_definitions([
///     OptionDefinition::integer("listen_port", 8080, "Proxy service port"),
/// ]).unwrap();
///
/// let file = Layer::new(Origin::File);
/// let mut cli = Layer::new(Origin::Cli);
/// cli.push("listen_port", RawValue::text("443"));
///
/// let snapshot = resolve(&schema, &file, &cli, &["listen_port=8080".to_string()])?;
/// // The override layer wins.
/// assert_eq!(snapshot.get_int("listen_port"), Some(8080));
/// # Ok::<(), option_schema_resolve::ResolveError>(())
/// ```
pub fn resolve(
    schema: &OptionSchema,
    file: &Layer,
    cli: &Layer,
    overrides: &[String],
) -> Result<SettingsSnapshot> {
    let mut values: Vec<Value> = schema.all().map(|def| def.default_value()).collect();
    let index: HashMap<&str, usize> = schema
        .all()
        .enumerate()
        .map(|(i, def)| (def.name(), i))
        .collect();

    apply_layer(schema, &index, &mut values, file)?;
    apply_layer(schema, &index, &mut values, cli)?;
    apply_overrides(schema, &index, &mut values, overrides)?;

    let entries = schema
        .all()
        .map(|def| def.name().to_string())
        .zip(values)
        .collect();
    Ok(SettingsSnapshot::new(entries))
}

fn apply_layer(
    schema: &OptionSchema,
    index: &HashMap<&str, usize>,
    values: &mut [Value],
    layer: &Layer,
) -> Result<()> {
    for (name, raw) in layer.entries() {
        let def = schema
            .lookup(name)
            .map_err(|e| ResolveError::in_layer(layer.origin(), e))?;
        let value = coerce(def, raw).map_err(|e| ResolveError::in_layer(layer.origin(), e))?;
        debug!(option = def.name(), layer = %layer.origin(), %value, "layer value applied");
        values[index[def.name()]] = value;
    }
    Ok(())
}

fn apply_overrides(
    schema: &OptionSchema,
    index: &HashMap<&str, usize>,
    values: &mut [Value],
    overrides: &[String],
) -> Result<()> {
    for token in overrides {
        let spec = SetSpec::parse(token);
        let def = schema
            .lookup(spec.name())
            .map_err(|e| ResolveError::in_layer(Origin::Override, e))?;
        let slot = index[def.name()];
        let raw = spec.raw_value();

        // Valued tokens append to sequences; everything else goes through
        // plain coercion (which also covers sequence omission → empty).
        let value = match (def.kind(), &raw) {
            (Kind::Seq, RawValue::Text(item)) => {
                let mut items = match &values[slot] {
                    Value::Seq(items) => items.clone(),
                    _ => Vec::new(),
                };
                items.push(item.clone());
                Value::Seq(items)
            }
            _ => coerce(def, &raw).map_err(|e| ResolveError::in_layer(Origin::Override, e))?,
        };
        debug!(option = def.name(), layer = %Origin::Override, %value, "override applied");
        values[slot] = value;
    }
    Ok(())
}
