//! Core types for declarative option schemas.
//!
//! This crate is the single source of truth describing every configurable
//! setting of an application, from which command-line flags are generated,
//! configuration files are decoded, and startup overrides are applied:
//!
//! - [`OptionDefinition`] — one named, typed setting with default, help
//!   text, and optional short alias.
//! - [`Kind`] / [`Value`] — value categories and resolved values, including
//!   the [`Value::Unset`] sentinel for optional scalars.
//! - [`RawValue`] — an uninterpreted value captured from one input source,
//!   including the absence-of-value marker.
//! - [`OptionSchema`] — the immutable registry, built once from an ordered
//!   catalogue, with deterministic iteration order.
//! - [`coerce`] — the type coercion engine with its per-kind omission rules.
//!
//! # Example
//!
//! ```
//! use option_schema_core::*;
//!
//! let schema = OptionSchema::from_definitions([
//!     OptionDefinition::string("listen_host", "", "Address to bind proxy to"),
//!     OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
//!     OptionDefinition::sequence("scripts", "Execute a script").with_short('s'),
//! ])?;
//!
//! let port = schema.lookup("listen-port")?;
//! assert_eq!(coerce(port, &RawValue::text("443"))?, Value::Int(443));
//! # Ok::<(), option_schema_core::OptionsError>(())
//! ```

mod coerce;
mod error;
mod schema;
mod types;

pub use coerce::coerce;
pub use error::{OptionsError, Result};
pub use schema::OptionSchema;
pub use types::{Kind, OptionDefinition, RawValue, Value, canonical_name};
