//! # Butterfly-trip CLI
//!
//! Command-line interface for the butterfly-trip library.
//! Serves the stop-ordering API or orders a single JSON request offline.

use anyhow::Result;
use butterfly_trip::cli::{run_solve, Cli, Commands};
use butterfly_trip::logging::init_logging;
use butterfly_trip::server;
use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for `solve` output
    init_logging(cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("🦋 Butterfly-trip v{} starting...", env!("CARGO_PKG_VERSION"));
            server::serve(args.server_config()).await
        }
        Commands::Solve {
            input,
            pretty,
            format,
        } => Ok(run_solve(&input, format, pretty)?),
    }
}
