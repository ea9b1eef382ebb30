//! Command-line configuration for the game server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Tic-tac-toe with move history, served to the browser.
#[derive(Parser, Debug, Clone)]
#[command(name = "tic-tac-toe-history")]
#[command(about = "Serves a tic-tac-toe board with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Address serving the page and its assets
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub http_addr: SocketAddr,

    /// Address accepting WebSocket connections
    #[arg(long, default_value = "127.0.0.1:8081")]
    pub ws_addr: SocketAddr,

    /// WebSocket URL handed to the browser (defaults to ws://<ws-addr>)
    #[arg(long)]
    pub ws_endpoint: Option<String>,

    /// Directory holding index.html, app.js and grid.css
    #[arg(long, default_value = "src/static")]
    pub static_dir: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl Cli {
    pub fn ws_endpoint(&self) -> String {
        self.ws_endpoint
            .clone()
            .unwrap_or_else(|| format!("ws://{}", self.ws_addr))
    }
}
