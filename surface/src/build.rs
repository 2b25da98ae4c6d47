//! Projection of an option schema into a clap command.
//!
//! The surface is built at runtime from schema metadata: each definition in
//! the given subset becomes one flag whose long name, short alias, arity,
//! and help text derive mechanically from the definition. A fixed set of
//! common flags (`--version`, `--shortversion`, `--options`, `--conf`,
//! `--set`, `-q`, `-v`) is always present.
//!
//! Structural problems — duplicate short aliases, collisions with reserved
//! flags, names listed twice — are programming errors in the host's
//! catalogue and fail fast at build time, before any user input is parsed.

use std::collections::{HashMap, HashSet};

use clap::{Arg, ArgAction, Command};
use tracing::debug;

use option_schema_core::{Kind, OptionDefinition, OptionSchema, OptionsError, Value};

use crate::error::{Result, SurfaceError};
use crate::group::OptionGroup;
use crate::invoke::default_config_path;

/// Long names claimed by the always-present flags (plus clap's help).
const RESERVED_LONG: &[&str] = &[
    "version",
    "shortversion",
    "options",
    "conf",
    "set",
    "quiet",
    "verbose",
    "help",
];

#[derive(Debug)]
pub(crate) struct SurfaceOption {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    /// Default-true booleans surface as a `--no-<name>` negation toggle.
    pub(crate) negated: bool,
}

/// A generated command-line surface for one command's schema subset.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionDefinition, OptionSchema};
/// use option_schema_surface::{CommandSurface, OptionGroup};
///
/// let schema = OptionSchema::from_definitions([
///     OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
/// ]).unwrap();
///
/// let surface = CommandSurface::build(
///     "proxydump",
///     "Dump proxied traffic",
///     &schema,
///     &[OptionGroup::new("Proxy Options").option("listen_port")],
/// )?;
/// let argv = ["proxydump".to_string(), "-p".to_string(), "443".to_string()];
/// let invocation = surface.parse(&argv)?;
/// assert_eq!(invocation.cli_layer.len(), 1);
/// # Ok::<(), option_schema_surface::SurfaceError>(())
/// ```
#[derive(Debug)]
pub struct CommandSurface {
    pub(crate) command: Command,
    pub(crate) options: Vec<SurfaceOption>,
}

impl CommandSurface {
    /// Builds the surface for a command over the given ordered groups of
    /// schema options.
    ///
    /// # Errors
    ///
    /// Fails with [`SurfaceError::Schema`] for unknown or duplicated option
    /// names and duplicate short aliases, and with
    /// [`SurfaceError::ReservedOption`] when a schema option collides with
    /// an always-present flag. A failed build yields no surface at all.
    pub fn build(
        name: &str,
        about: &str,
        schema: &OptionSchema,
        groups: &[OptionGroup],
    ) -> Result<Self> {
        let default_conf = default_config_path(name).display().to_string();
        let mut command = common_args(
            Command::new(name.to_string())
                .about(about.to_string())
                .disable_version_flag(true),
            default_conf,
        );

        let mut shorts: HashMap<char, String> = HashMap::from([
            ('h', "help".to_string()),
            ('q', "quiet".to_string()),
            ('v', "verbose".to_string()),
        ]);
        let mut seen: HashSet<String> = HashSet::new();
        let mut options = Vec::new();

        for group in groups {
            for option in group.options() {
                let def = schema.lookup(option).map_err(SurfaceError::Schema)?;
                if !seen.insert(def.name().to_string()) {
                    return Err(OptionsError::DuplicateOption(def.name().to_string()).into());
                }

                let negated = def.kind() == Kind::Bool && def.default_value() == Value::Bool(true);
                let long = flag_long(def, negated);
                if RESERVED_LONG.contains(&def.name()) || RESERVED_LONG.contains(&long.as_str()) {
                    return Err(SurfaceError::ReservedOption(def.name().to_string()));
                }

                let mut arg = make_arg(def, long, &mut shorts)?;
                if let Some(heading) = group.heading() {
                    arg = arg.help_heading(heading.to_string());
                }
                command = command.arg(arg);
                options.push(SurfaceOption {
                    name: def.name().to_string(),
                    kind: def.kind(),
                    negated,
                });
            }
        }

        debug!(command = name, options = options.len(), "surface built");
        Ok(Self { command, options })
    }

    /// The generated clap command (e.g. for rendering help out of band).
    pub fn command(&self) -> &Command {
        &self.command
    }
}

fn flag_long(def: &OptionDefinition, negated: bool) -> String {
    if negated {
        format!("no-{}", def.flag_name())
    } else {
        def.flag_name()
    }
}

fn make_arg(def: &OptionDefinition, long: String, shorts: &mut HashMap<char, String>) -> Result<Arg> {
    let mut arg = Arg::new(def.name().to_string())
        .long(long)
        .help(def.help().to_string());

    if let Some(short) = def.short() {
        if let Some(existing) = shorts.get(&short) {
            return Err(OptionsError::DuplicateShortFlag {
                short,
                option: def.name().to_string(),
                existing: existing.clone(),
            }
            .into());
        }
        shorts.insert(short, def.name().to_string());
        arg = arg.short(short);
    }

    arg = match def.kind() {
        Kind::Bool => arg.action(ArgAction::SetTrue),
        Kind::Seq => arg.action(ArgAction::Append).value_name("VALUE"),
        Kind::Str => arg.action(ArgAction::Set).value_name("VALUE"),
        Kind::Int => arg.action(ArgAction::Set).value_name("N"),
    };
    Ok(arg)
}

fn common_args(command: Command, default_conf: String) -> Command {
    command
        .arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Show version information and exit"),
        )
        .arg(
            Arg::new("shortversion")
                .long("shortversion")
                .action(ArgAction::SetTrue)
                .help("Show the program's short version number and exit"),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .action(ArgAction::SetTrue)
                .help("Dump all resolved options"),
        )
        .arg(
            Arg::new("conf")
                .long("conf")
                .value_name("PATH")
                .action(ArgAction::Set)
                .default_value(default_conf)
                .help("Read options from a configuration file"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("option[=value]")
                .action(ArgAction::Append)
                .help(
                    "Set an option. When the value is omitted, booleans are set to true, \
                     strings and integers are set to unset (if permitted), and sequences \
                     are emptied.",
                ),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Increase log verbosity."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> OptionSchema {
        OptionSchema::from_definitions([
            OptionDefinition::string("mode", "regular", "Proxy mode").with_short('m'),
            OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
            OptionDefinition::boolean("server", true, "Start a proxy server").with_short('n'),
            OptionDefinition::sequence("scripts", "Execute a script").with_short('s'),
        ])
        .unwrap()
    }

    fn everything() -> Vec<OptionGroup> {
        vec![
            OptionGroup::ungrouped().option("mode").option("scripts"),
            OptionGroup::new("Proxy Options")
                .option("listen_port")
                .option("server"),
        ]
    }

    #[test]
    fn test_build_accepts_grouped_subset() {
        let surface = CommandSurface::build("proxydump", "", &schema(), &everything()).unwrap();
        assert_eq!(surface.options.len(), 4);
    }

    #[test]
    fn test_default_true_bool_becomes_negation_flag() {
        let surface = CommandSurface::build("proxydump", "", &schema(), &everything()).unwrap();
        let longs: Vec<String> = surface
            .command
            .get_arguments()
            .filter_map(|a| a.get_long().map(String::from))
            .collect();
        assert!(longs.contains(&"no-server".to_string()));
        assert!(!longs.contains(&"server".to_string()));
    }

    #[test]
    fn test_unknown_option_fails_build() {
        let groups = vec![OptionGroup::ungrouped().option("bogus")];
        let err = CommandSurface::build("proxydump", "", &schema(), &groups).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::Schema(OptionsError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_option_listed_twice_fails_build() {
        let groups = vec![OptionGroup::ungrouped().option("mode").option("mode")];
        let err = CommandSurface::build("proxydump", "", &schema(), &groups).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::Schema(OptionsError::DuplicateOption(_))
        ));
    }

    #[test]
    fn test_duplicate_short_alias_fails_build() {
        let schema = OptionSchema::from_definitions([
            OptionDefinition::string("mode", "regular", "").with_short('m'),
            OptionDefinition::optional_string("match_hosts", "").with_short('m'),
        ])
        .unwrap();
        let groups = vec![
            OptionGroup::ungrouped()
                .option("mode")
                .option("match_hosts"),
        ];
        let err = CommandSurface::build("proxydump", "", &schema, &groups).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::Schema(OptionsError::DuplicateShortFlag { short: 'm', .. })
        ));
    }

    #[test]
    fn test_reserved_short_alias_fails_build() {
        let schema = OptionSchema::from_definitions([
            // -v belongs to --verbose on every surface.
            OptionDefinition::boolean("validate_certs", false, "").with_short('v'),
        ])
        .unwrap();
        let groups = vec![OptionGroup::ungrouped().option("validate_certs")];
        let err = CommandSurface::build("proxydump", "", &schema, &groups).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::Schema(OptionsError::DuplicateShortFlag { short: 'v', .. })
        ));
    }

    #[test]
    fn test_reserved_long_name_fails_build() {
        let schema = OptionSchema::from_definitions([OptionDefinition::boolean(
            "options", false, "",
        )])
        .unwrap();
        let groups = vec![OptionGroup::ungrouped().option("options")];
        let err = CommandSurface::build("proxydump", "", &schema, &groups).unwrap_err();
        assert!(matches!(err, SurfaceError::ReservedOption(ref name) if name == "options"));
    }
}
