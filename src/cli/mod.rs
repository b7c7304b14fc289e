mod handlers;
pub mod parse;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use parse::Cli;

use crate::core::error::SparkError;

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), SparkError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.demo {
        handlers::examples(&cli)
    } else {
        handlers::sparkline(cli)
    }
}
