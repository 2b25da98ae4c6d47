use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use option_schema_core::{OptionDefinition, OptionSchema};
use option_schema_resolve::{Layer, Origin, load_file_layer, resolve};
use option_schema_surface::{CommandSurface, Invocation, OptionGroup, SurfaceError};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

const ABOUT: &str = "Resolve and inspect proxy configuration from file, flags, and overrides";

/// The host application's option catalogue. The schema system itself does
/// not define what options exist; this is one realistic consumer.
fn catalogue() -> Result<OptionSchema, String> {
    OptionSchema::from_definitions([
        OptionDefinition::string(
            "mode",
            "regular",
            "Mode can be \"regular\", \"transparent\", \"socks5\", \"reverse:SPEC\", \
             or \"upstream:SPEC\"",
        )
        .with_short('m'),
        OptionDefinition::boolean(
            "anticache",
            false,
            "Strip out request headers that might cause the server to return 304-not-modified",
        ),
        OptionDefinition::boolean(
            "showhost",
            false,
            "Use the Host header to construct URLs for display",
        ),
        OptionDefinition::optional_string("rfile", "Read flows from file").with_short('r'),
        OptionDefinition::sequence("scripts", "Execute a script").with_short('s'),
        OptionDefinition::optional_string("stickycookie", "Set sticky cookie filter"),
        OptionDefinition::optional_string("stickyauth", "Set sticky auth filter"),
        OptionDefinition::boolean(
            "anticomp",
            false,
            "Try to convince servers to send us un-compressed data",
        ),
        OptionDefinition::integer("flow_detail", 1, "The display detail level for flows"),
        OptionDefinition::optional_integer(
            "body_size_limit",
            "Byte size limit of HTTP request and response bodies",
        ),
        OptionDefinition::string("listen_host", "", "Address to bind proxy to"),
        OptionDefinition::integer("listen_port", 8080, "Proxy service port").with_short('p'),
        OptionDefinition::boolean("server", true, "Start a proxy server").with_short('n'),
        OptionDefinition::sequence(
            "ignore_hosts",
            "Ignore host and forward all traffic without processing it",
        ),
        OptionDefinition::sequence(
            "tcp_hosts",
            "Generic TCP SSL proxy mode for all hosts that match the pattern",
        ),
        OptionDefinition::optional_string(
            "upstream_auth",
            "Add HTTP Basic authentication to upstream proxy requests",
        ),
        OptionDefinition::boolean("rawtcp", false, "Enable experimental raw TCP support"),
        OptionDefinition::sequence("certs", "SSL certificates of the form \"[domain=]path\""),
        OptionDefinition::boolean(
            "ssl_insecure",
            false,
            "Do not verify upstream server SSL/TLS certificates",
        )
        .with_short('k'),
        OptionDefinition::sequence("client_replay", "Replay client requests from a saved file")
            .with_short('C'),
        OptionDefinition::sequence("server_replay", "Replay server responses from a saved file")
            .with_short('S'),
        OptionDefinition::boolean(
            "replay_kill_extra",
            false,
            "Kill extra requests during replay",
        ),
    ])
    .map_err(|err| err.to_string())
}

fn groups() -> Vec<OptionGroup> {
    vec![
        OptionGroup::ungrouped()
            .option("mode")
            .option("anticache")
            .option("showhost")
            .option("rfile")
            .option("scripts")
            .option("stickycookie")
            .option("stickyauth")
            .option("anticomp")
            .option("flow_detail")
            .option("body_size_limit"),
        OptionGroup::new("Proxy Options")
            .option("listen_host")
            .option("listen_port")
            .option("server")
            .option("ignore_hosts")
            .option("tcp_hosts")
            .option("upstream_auth")
            .option("rawtcp"),
        OptionGroup::new("SSL")
            .option("certs")
            .option("ssl_insecure"),
        OptionGroup::new("Client Replay").option("client_replay"),
        OptionGroup::new("Server Replay")
            .option("server_replay")
            .option("replay_kill_extra"),
    ]
}

fn init_logging(invocation: &Invocation) {
    let level = if invocation.quiet {
        "error"
    } else if invocation.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(argv: &[String]) -> Result<ExitCode, String> {
    let schema = catalogue()?;
    let surface = CommandSurface::build("optdump", ABOUT, &schema, &groups())
        .map_err(|err| err.to_string())?;

    let invocation = match surface.parse(argv) {
        Ok(invocation) => invocation,
        Err(SurfaceError::Help(text)) => {
            println!("{text}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(SurfaceError::Usage(message)) => {
            eprintln!("{message}");
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err.to_string()),
    };

    if invocation.shortversion {
        println!("{PACKAGE_VERSION}");
        return Ok(ExitCode::SUCCESS);
    }
    if invocation.version {
        println!("optdump {PACKAGE_VERSION}");
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&invocation);

    let file_layer = if invocation.conf.exists() {
        load_file_layer(&invocation.conf).map_err(|err| err.to_string())?
    } else if invocation.conf_explicit {
        return Err(format!(
            "configuration file not found: {}",
            invocation.conf.display()
        ));
    } else {
        Layer::new(Origin::File)
    };

    let snapshot = resolve(
        &schema,
        &file_layer,
        &invocation.cli_layer,
        &invocation.set_specs,
    )
    .map_err(|err| err.to_string())?;

    if invocation.dump_options {
        print!("{}", snapshot.to_yaml().map_err(|err| err.to_string())?);
        return Ok(ExitCode::SUCCESS);
    }

    info!(
        mode = snapshot.get_str("mode").unwrap_or_default(),
        host = snapshot.get_str("listen_host").unwrap_or_default(),
        port = snapshot.get_int("listen_port").unwrap_or_default(),
        "configuration resolved"
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
