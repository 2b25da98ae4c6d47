//! Builds a command surface from a schema and parses a canned argument
//! vector through the full pipeline.
//!
//! Run with: `cargo run -p option-schema-demos --example generated_cli`

use option_schema_core::{OptionDefinition, OptionSchema};
use option_schema_resolve::{Layer, Origin, resolve};
use option_schema_surface::{CommandSurface, OptionGroup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = OptionSchema::from_definitions([
        OptionDefinition::string("mode", "regular", "Proxy mode").with_short('m'),
        OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
        OptionDefinition::boolean("server", true, "Start a proxy server").with_short('n'),
        OptionDefinition::sequence("scripts", "Execute a script").with_short('s'),
    ])?;

    let surface = CommandSurface::build(
        "demo",
        "Generated surface demo",
        &schema,
        &[
            OptionGroup::ungrouped().option("mode").option("scripts"),
            OptionGroup::new("Proxy Options")
                .option("listen_port")
                .option("server"),
        ],
    )?;

    let argv: Vec<String> = [
        "demo", "-p", "443", "--no-server", "-s", "a.py", "--set", "mode=socks5",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let invocation = surface.parse(&argv)?;
    let snapshot = resolve(
        &schema,
        &Layer::new(Origin::File),
        &invocation.cli_layer,
        &invocation.set_specs,
    )?;

    print!("{}", snapshot.to_yaml()?);
    Ok(())
}
