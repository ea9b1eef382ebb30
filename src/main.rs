use anyhow::Result;
use clap::Parser;
use tic_tac_toe_history::cli::Cli;
use tic_tac_toe_history::resources::StaticResource;
use tic_tac_toe_history::server::{serve_http, serve_ws};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .init();

    let ws_endpoint = cli.ws_endpoint();
    let resources = StaticResource::new(&cli.static_dir, &ws_endpoint).await?;

    let http_listener = TcpListener::bind(cli.http_addr).await?;
    let ws_listener = TcpListener::bind(cli.ws_addr).await?;
    info!(page = %cli.http_addr, socket = %ws_endpoint, "Tic-tac-toe ready");

    tokio::try_join!(serve_http(http_listener, resources), serve_ws(ws_listener))?;
    Ok(())
}
