//! Layered configuration resolution over declarative option schemas.
//!
//! This crate turns raw input from three heterogeneous sources into one
//! immutable settings snapshot:
//!
//! - [`Layer`] / [`Origin`] — origin-tagged ordered raw values from the
//!   configuration file and the generated command-line parser.
//! - [`file_layer_from_str`] / [`load_file_layer`] — YAML configuration
//!   document decoding (always-explicit values; no omission convention).
//! - [`SetSpec`] — the `name[=value]` override syntax used by `--set`.
//! - [`resolve`] — the fixed-precedence merge
//!   (defaults < file < CLI flags < overrides), atomic on failure.
//! - [`SettingsSnapshot`] — the read-only result, shareable across threads.
//!
//! Resolution happens once per process lifetime, synchronously, before any
//! concurrent subsystem starts.
//!
//! # Example
//!
//! ```
//! use option_schema_core::{OptionDefinition, OptionSchema, RawValue};
//! use option_schema_resolve::{Layer, Origin, file_layer_from_str, resolve};
//!
//! let schema = OptionSchema::from_definitions([
//!     OptionDefinition::string("listen_host", "", "Address to bind to"),
//!     OptionDefinition::integer("listen_port", 8080, "Proxy service port"),
//! ]).unwrap();
//!
//! let file = file_layer_from_str("listen_port: 9090\n")?;
//! let mut cli = Layer::new(Origin::Cli);
//! cli.push("listen_host", RawValue::text("127.0.0.1"));
//!
//! let snapshot = resolve(&schema, &file, &cli, &["listen_port=443".to_string()])?;
//! assert_eq!(snapshot.get_str("listen_host"), Some("127.0.0.1"));
//! assert_eq!(snapshot.get_int("listen_port"), Some(443));
//! # Ok::<(), option_schema_resolve::ResolveError>(())
//! ```

mod error;
mod file;
mod layer;
mod resolver;
mod setspec;
mod snapshot;

pub use error::{ResolveError, Result};
pub use file::{file_layer_from_str, load_file_layer};
pub use layer::{Layer, Origin};
pub use resolver::resolve;
pub use setspec::SetSpec;
pub use snapshot::SettingsSnapshot;
