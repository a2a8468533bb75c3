use clap::Parser;
use srcscan::{Cli, handlers::run_normal_mode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run_normal_mode(&cli)
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the default
/// level; `--verbose` raises the default to debug. Diagnostics go to
/// stderr so report output stays pipeable.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        "srcscan=debug"
    } else {
        "srcscan=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
