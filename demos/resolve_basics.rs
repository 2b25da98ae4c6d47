//! Resolves a small schema across all three layers and prints the result.
//!
//! Run with: `cargo run -p option-schema-demos --example resolve_basics`

use option_schema_core::{OptionDefinition, OptionSchema, RawValue};
use option_schema_resolve::{Layer, Origin, file_layer_from_str, resolve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = OptionSchema::from_definitions([
        OptionDefinition::string("listen_host", "", "Address to bind proxy to"),
        OptionDefinition::integer("listen_port", 8080, "Proxy service port"),
        OptionDefinition::sequence("scripts", "Execute a script"),
        OptionDefinition::optional_string("rfile", "Read flows from file"),
    ])?;

    // The file layer would normally come from --conf.
    let file = file_layer_from_str("listen_port: 9090\nscripts: [one.py]\n")?;

    // The CLI layer would normally come from the generated parser.
    let mut cli = Layer::new(Origin::Cli);
    cli.push("listen_host", RawValue::text("127.0.0.1"));

    // Overrides win over everything; a bare name empties the sequence.
    let overrides = vec!["scripts".to_string(), "scripts=two.py".to_string()];

    let snapshot = resolve(&schema, &file, &cli, &overrides)?;
    print!("{}", snapshot.to_yaml()?);
    Ok(())
}
