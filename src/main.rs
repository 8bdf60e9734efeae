//! trip-mate - Trip planning from your terminal
//!
//! A terminal client for the Trip Mate server.
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.
//!
//! Available as the `tripmate` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trip_mate::api::TripMateClient;
use trip_mate::cli::commands::{Cli, Commands};
use trip_mate::cli::{ask, config, health};
use trip_mate::core::config::resolve_endpoint;
use trip_mate::error::Result;
use trip_mate::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let endpoint_override = cli.endpoint.as_deref();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui(endpoint_override).await,

        // Config commands don't need a reachable endpoint
        Some(Commands::Config(args)) => config::handle_config(args.command),

        Some(Commands::Ask(args)) => ask::handle_ask(args, resolve_endpoint(endpoint_override)?).await,
        Some(Commands::Health) => health::handle_health(resolve_endpoint(endpoint_override)?).await,
    }
}

/// Run the TUI application
async fn run_tui(endpoint_override: Option<&str>) -> Result<()> {
    let endpoint = resolve_endpoint(endpoint_override)?;
    tracing::debug!(%endpoint, "starting TUI");

    let mut app = App::new(TripMateClient::new(endpoint));
    app.run().await
}
