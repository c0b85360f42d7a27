//! Service entry point — CLI wiring and config-driven server startup.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::process;

use merit_dispatch::api;
use merit_dispatch::config::{LogConfig, ServiceConfig};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    host_override: Option<String>,
    port_override: Option<u16>,
}

fn print_help() {
    eprintln!("merit-dispatch — merit-order production-plan service");
    eprintln!();
    eprintln!("Usage: merit-dispatch [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   Load service config from TOML file");
    eprintln!("  --host <addr>     Override bind address (default: 0.0.0.0)");
    eprintln!("  --port <u16>      Override listener port (default: 8888)");
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("If no --config is given, built-in defaults are used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        host_override: None,
        port_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--host" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --host requires an address argument");
                    process::exit(1);
                }
                cli.host_override = Some(args[i].clone());
            }
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port_override = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Installs the global tracing subscriber per the log config.
///
/// `RUST_LOG` takes priority over the configured filter.
fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = parse_args();

    let mut config = if let Some(ref path) = cli.config_path {
        match ServiceConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ServiceConfig::default()
    };

    if let Some(host) = cli.host_override {
        config.server.host = host;
    }
    if let Some(port) = cli.port_override {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    init_tracing(&config.log);

    // validate() already confirmed the host parses
    let ip: IpAddr = config
        .server
        .host
        .parse()
        .unwrap_or_else(|_| unreachable!("host was validated"));
    let addr = SocketAddr::new(ip, config.server.port);

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    rt.block_on(api::serve(addr));
}
