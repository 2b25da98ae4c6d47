//! Generated command-line surfaces for declarative option schemas.
//!
//! This crate is one of two projections over the option schema (the other
//! being the type coercion engine): it turns an ordered subset of
//! definitions into a clap command, entirely from declared metadata —
//! no reflection, no per-option wiring in the host.
//!
//! - [`OptionGroup`] — named display sections (help headings only; no
//!   effect on resolution).
//! - [`CommandSurface`] — the generated parser: one flag per definition
//!   with kind-appropriate arity, plus the always-present common flags
//!   (`--version`, `--shortversion`, `--options`, `--conf PATH`,
//!   `--set option[=value]`, `-q`, `-v`).
//! - [`Invocation`] — parse output: common-flag results, ordered `--set`
//!   tokens, and the CLI layer for the resolver.
//!
//! # Example
//!
//! ```
//! use option_schema_core::{OptionDefinition, OptionSchema};
//! use option_schema_resolve::{Layer, Origin, resolve};
//! use option_schema_surface::{CommandSurface, OptionGroup};
//!
//! let schema = OptionSchema::from_definitions([
//!     OptionDefinition::string("listen_host", "", "Address to bind proxy to"),
//!     OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
//! ]).unwrap();
//!
//! let surface = CommandSurface::build(
//!     "proxydump",
//!     "Dump proxied traffic",
//!     &schema,
//!     &[OptionGroup::new("Proxy Options").option("listen_host").option("listen_port")],
//! )?;
//!
//! let argv: Vec<String> = ["proxydump", "-p", "443", "--set", "listen_host=::1"]
//!     .iter().map(|s| s.to_string()).collect();
//! let invocation = surface.parse(&argv)?;
//!
//! let snapshot = resolve(
//!     &schema,
//!     &Layer::new(Origin::File),
//!     &invocation.cli_layer,
//!     &invocation.set_specs,
//! ).unwrap();
//! assert_eq!(snapshot.get_int("listen_port"), Some(443));
//! assert_eq!(snapshot.get_str("listen_host"), Some("::1"));
//! # Ok::<(), option_schema_surface::SurfaceError>(())
//! ```

mod build;
mod error;
mod group;
mod invoke;

pub use build::CommandSurface;
pub use error::{Result, SurfaceError};
pub use group::OptionGroup;
pub use invoke::{Invocation, default_config_path};
