use std::io::Write;

use option_schema_core::{OptionDefinition, OptionSchema, OptionsError, RawValue, Value};
use option_schema_resolve::{
    Layer, Origin, ResolveError, file_layer_from_str, load_file_layer, resolve,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn proxy_schema() -> OptionSchema {
    OptionSchema::from_definitions([
        OptionDefinition::string("mode", "regular", "Proxy mode").with_short('m'),
        OptionDefinition::string("listen_host", "", "Address to bind proxy to"),
        OptionDefinition::integer("listen_port", 80, "Proxy service port").with_short('p'),
        OptionDefinition::boolean("ssl_insecure", false, "Do not verify upstream certs")
            .with_short('k'),
        OptionDefinition::sequence("scripts", "Execute a script").with_short('s'),
        OptionDefinition::optional_string("rfile", "Read flows from file").with_short('r'),
        OptionDefinition::optional_integer("body_size_limit", "Byte size limit of HTTP bodies"),
    ])
    .unwrap()
}

fn empty(origin: Origin) -> Layer {
    Layer::new(origin)
}

// ---------------------------------------------------------------------------
// Precedence across layers
// ---------------------------------------------------------------------------

#[test]
fn test_full_precedence_chain() {
    let schema = proxy_schema();

    // default 80 < file 90 < cli 443, no override.
    let file = file_layer_from_str("listen_port: 90\n").unwrap();
    let mut cli = Layer::new(Origin::Cli);
    cli.push("listen_port", RawValue::text("443"));

    let snapshot = resolve(&schema, &file, &cli, &[]).unwrap();
    assert_eq!(snapshot.get_int("listen_port"), Some(443));

    // Adding an override wins over everything.
    let snapshot = resolve(&schema, &file, &cli, &["listen_port=8080".to_string()]).unwrap();
    assert_eq!(snapshot.get_int("listen_port"), Some(8080));
}

#[test]
fn test_untouched_options_keep_defaults() {
    let schema = proxy_schema();
    let file = file_layer_from_str("listen_port: 90\n").unwrap();

    let snapshot = resolve(&schema, &file, &empty(Origin::Cli), &[]).unwrap();
    assert_eq!(snapshot.get_str("mode"), Some("regular"));
    assert_eq!(snapshot.get_bool("ssl_insecure"), Some(false));
    assert_eq!(snapshot.get("rfile"), Some(&Value::Unset));
    assert_eq!(snapshot.get("body_size_limit"), Some(&Value::Unset));
}

#[test]
fn test_every_option_has_exactly_one_entry() {
    let schema = proxy_schema();
    let snapshot = resolve(&schema, &empty(Origin::File), &empty(Origin::Cli), &[]).unwrap();

    assert_eq!(snapshot.len(), schema.len());
    let names: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
    let schema_names: Vec<&str> = schema.all().map(|def| def.name()).collect();
    assert_eq!(names, schema_names);
}

// ---------------------------------------------------------------------------
// Override syntax semantics
// ---------------------------------------------------------------------------

#[test]
fn test_override_tokens_apply_in_order() {
    let schema = proxy_schema();
    let snapshot = resolve(
        &schema,
        &empty(Origin::File),
        &empty(Origin::Cli),
        &[
            "listen_host=0.0.0.0".to_string(),
            "listen_host=127.0.0.1".to_string(),
        ],
    )
    .unwrap();
    assert_eq!(snapshot.get_str("listen_host"), Some("127.0.0.1"));
}

#[test]
fn test_override_bool_omission_sets_true() {
    let schema = proxy_schema();
    let snapshot = resolve(
        &schema,
        &empty(Origin::File),
        &empty(Origin::Cli),
        &["ssl_insecure".to_string()],
    )
    .unwrap();
    assert_eq!(snapshot.get_bool("ssl_insecure"), Some(true));
}

#[test]
fn test_override_sequence_empties_then_appends() {
    let schema = proxy_schema();
    let file = file_layer_from_str("scripts: [one.py, two.py]\n").unwrap();

    let snapshot = resolve(
        &schema,
        &file,
        &empty(Origin::Cli),
        &["scripts".to_string(), "scripts=three.py".to_string()],
    )
    .unwrap();
    assert_eq!(
        snapshot.get_seq("scripts"),
        Some(&["three.py".to_string()][..])
    );
}

#[test]
fn test_override_integer_omission_requires_optionality() {
    let schema = proxy_schema();

    // listen_port carries a default: omission is a user error.
    let err = resolve(
        &schema,
        &empty(Origin::File),
        &empty(Origin::Cli),
        &["listen_port".to_string()],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Layer {
            layer: Origin::Override,
            source: OptionsError::InvalidValue { .. },
        }
    ));

    // body_size_limit has no default: omission clears it.
    let file = file_layer_from_str("body_size_limit: 4096\n").unwrap();
    let snapshot = resolve(
        &schema,
        &file,
        &empty(Origin::Cli),
        &["body_size_limit".to_string()],
    )
    .unwrap();
    assert_eq!(snapshot.get("body_size_limit"), Some(&Value::Unset));
}

#[test]
fn test_unknown_override_is_atomic_failure() {
    let schema = proxy_schema();
    let result = resolve(
        &schema,
        &empty(Origin::File),
        &empty(Origin::Cli),
        &["listen_port=443".to_string(), "no_such=1".to_string()],
    );
    assert!(matches!(
        result,
        Err(ResolveError::Layer {
            layer: Origin::Override,
            source: OptionsError::UnknownOption(_),
        })
    ));
}

// ---------------------------------------------------------------------------
// File layer
// ---------------------------------------------------------------------------

#[test]
fn test_file_layer_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(
        f,
        "mode: transparent\nlisten_port: 9090\nscripts:\n  - one.py\n  - two.py\n"
    )
    .unwrap();
    f.flush().unwrap();

    let schema = proxy_schema();
    let file = load_file_layer(&path).unwrap();
    let snapshot = resolve(&schema, &file, &empty(Origin::Cli), &[]).unwrap();

    assert_eq!(snapshot.get_str("mode"), Some("transparent"));
    assert_eq!(snapshot.get_int("listen_port"), Some(9090));
    assert_eq!(
        snapshot.get_seq("scripts"),
        Some(&["one.py".to_string(), "two.py".to_string()][..])
    );
}

#[test]
fn test_file_layer_kebab_names_resolve() {
    let schema = proxy_schema();
    let file = file_layer_from_str("listen-port: 9090\n").unwrap();
    let snapshot = resolve(&schema, &file, &empty(Origin::Cli), &[]).unwrap();
    assert_eq!(snapshot.get_int("listen_port"), Some(9090));
}

#[test]
fn test_file_layer_unknown_option_is_rejected() {
    let schema = proxy_schema();
    let file = file_layer_from_str("not_an_option: 1\n").unwrap();
    let err = resolve(&schema, &file, &empty(Origin::Cli), &[]).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Layer {
            layer: Origin::File,
            source: OptionsError::UnknownOption(ref name),
        } if name == "not_an_option"
    ));
}

#[test]
fn test_file_layer_bad_value_names_option_and_layer() {
    let schema = proxy_schema();
    let file = file_layer_from_str("listen_port: not_a_number\n").unwrap();
    let err = resolve(&schema, &file, &empty(Origin::Cli), &[]).unwrap_err();
    match err {
        ResolveError::Layer {
            layer: Origin::File,
            source: OptionsError::InvalidValue { option, value, .. },
        } => {
            assert_eq!(option, "listen_port");
            assert_eq!(value, "not_a_number");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file_layer(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ResolveError::Io(_)));
}

// ---------------------------------------------------------------------------
// Snapshot dump
// ---------------------------------------------------------------------------

#[test]
fn test_options_dump_lists_all_options_in_order() {
    let schema = proxy_schema();
    let snapshot = resolve(
        &schema,
        &empty(Origin::File),
        &empty(Origin::Cli),
        &["scripts=one.py".to_string()],
    )
    .unwrap();

    let dump = snapshot.to_yaml().unwrap();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "mode: regular");
    assert!(dump.contains("listen_port: 80"));
    assert!(dump.contains("rfile: null"));
    assert!(dump.contains("- one.py"));
}
