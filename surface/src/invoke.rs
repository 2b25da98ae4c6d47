//! Argument parsing against a generated surface.
//!
//! [`CommandSurface::parse`] runs clap over a process argument vector and
//! splits the result into the common-flag outcomes and the CLI layer: an
//! ordered set of raw values for exactly those schema options the user
//! actually supplied. Values stay textual here; coercion happens in the
//! resolver so that every layer shares one diagnostics path.

use std::path::PathBuf;

use clap::parser::ValueSource;
use tracing::debug;

use option_schema_core::{Kind, RawValue};
use option_schema_resolve::{Layer, Origin};

use crate::build::CommandSurface;
use crate::error::{Result, SurfaceError};

/// Everything captured from one invocation of a generated surface.
#[derive(Debug)]
pub struct Invocation {
    /// `--version` was given.
    pub version: bool,
    /// `--shortversion` was given.
    pub shortversion: bool,
    /// `--options` was given (dump the resolved snapshot).
    pub dump_options: bool,
    /// Configuration file path (the default location unless `--conf` was
    /// passed).
    pub conf: PathBuf,
    /// Whether `--conf` was passed explicitly. A missing file at the
    /// default location is tolerable; a missing file the user named is not.
    pub conf_explicit: bool,
    /// `-q`/`--quiet` was given.
    pub quiet: bool,
    /// `-v`/`--verbose` was given.
    pub verbose: bool,
    /// Raw `--set` tokens, in the order supplied.
    pub set_specs: Vec<String>,
    /// Raw values for schema options present on the command line.
    pub cli_layer: Layer,
}

impl CommandSurface {
    /// Parses an argument vector (including the program name at index 0).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Usage`] for unrecognized flags or malformed
    /// invocations, with a message naming the offending token, and
    /// [`SurfaceError::Help`] carrying the rendered help text when the user
    /// asked for it. Exit-code policy is the caller's.
    pub fn parse(&self, argv: &[String]) -> Result<Invocation> {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(argv)
            .map_err(|err| match err.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    SurfaceError::Help(err.to_string())
                }
                _ => SurfaceError::Usage(err.to_string()),
            })?;

        let set_specs: Vec<String> = matches
            .get_many::<String>("set")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let mut cli_layer = Layer::new(Origin::Cli);
        for option in &self.options {
            if matches.value_source(&option.name) != Some(ValueSource::CommandLine) {
                continue;
            }
            let raw = match option.kind {
                // A plain toggle is presence-without-text; a negation
                // toggle feeds an explicit `false` through coercion.
                Kind::Bool if option.negated => RawValue::text("false"),
                Kind::Bool => RawValue::Omitted,
                Kind::Seq => RawValue::List(
                    matches
                        .get_many::<String>(&option.name)
                        .map(|values| values.cloned().collect())
                        .unwrap_or_default(),
                ),
                Kind::Str | Kind::Int => RawValue::Text(
                    matches
                        .get_one::<String>(&option.name)
                        .cloned()
                        .unwrap_or_default(),
                ),
            };
            cli_layer.push(option.name.clone(), raw);
        }

        debug!(
            set_tokens = set_specs.len(),
            cli_entries = cli_layer.len(),
            "arguments parsed"
        );

        Ok(Invocation {
            version: matches.get_flag("version"),
            shortversion: matches.get_flag("shortversion"),
            dump_options: matches.get_flag("options"),
            conf: matches
                .get_one::<String>("conf")
                .map(PathBuf::from)
                .unwrap_or_default(),
            conf_explicit: matches.value_source("conf") == Some(ValueSource::CommandLine),
            quiet: matches.get_flag("quiet"),
            verbose: matches.get_flag("verbose"),
            set_specs,
            cli_layer,
        })
    }
}

/// Default configuration document location for an application: a fixed
/// file under the application's dot-directory in the user's home.
pub fn default_config_path(app: &str) -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{app}"))
        .join("config.yaml")
}
