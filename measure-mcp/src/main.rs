//! Measure MCP Server
//!
//! Newline-delimited JSON-RPC over stdio. Responses go to stdout; all
//! logging goes to stderr.

mod config;
mod protocol;
mod server;

use config::ServerConfig;
use server::Server;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), protocol = %config.protocol_version, "Measure MCP server started");

    let server = Server::new(measure_units::units_registry(), config);

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("client disconnected (EOF)");
                break;
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        };

        let Some(response) = server.handle_line(&line) else {
            continue;
        };

        let written = async {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await
        };
        if let Err(e) = written.await {
            error!(error = %e, "error writing response");
            break;
        }
    }

    info!("server shutting down");
}
