//! Grocer CLI - shared grocery lists from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default filter
/// to debug. Logs go to stderr so they never mix with list output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "grocer=debug,grocer_api=debug,grocer_core=debug"
    } else {
        "grocer=info,grocer_api=info,grocer_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
