//! wirekv CLI Client
//!
//! Runs a single command against a server and prints the reply.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use wirekv::{commands, ClientConfig, Connection};

/// wirekv CLI
#[derive(Parser, Debug)]
#[command(name = "wirekv-cli")]
#[command(about = "Run one command against a key-value server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:6379")]
    server: String,

    /// Connect/read/write timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// Command name (case-insensitive)
    command: String,

    /// Command arguments, passed through as raw bytes
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wirekv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(command) = commands::lookup(&args.command) else {
        eprintln!("(error) unknown command '{}'", args.command);
        std::process::exit(1);
    };

    let config = ClientConfig::builder()
        .server_addr(&args.server)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let mut conn = match Connection::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let raw: Vec<&[u8]> = args.args.iter().map(|a| a.as_bytes()).collect();
    match conn.execute(command, &raw) {
        Ok(response) => {
            println!("{}", response);
            if response.is_error() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("{} failed: {}", command, e);
            std::process::exit(1);
        }
    }
}
