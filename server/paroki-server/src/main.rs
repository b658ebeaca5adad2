use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use error_common::{ParokiError, Result};
use paroki_server::{create_app, ParokiServer};

/// Paroki Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "paroki-server")]
#[command(about = "Church ushering scheduling HTTP API server")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(args.verbose)?;

    info!("Starting Paroki Engine HTTP Server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Bind address: {}:{}", args.host, args.port);

    // Initialize the Paroki server (database pool, gate client, policy)
    let server = ParokiServer::new()
        .await
        .map_err(|e| ParokiError::ServerError(format!("Server init failed: {e}")))?;

    // Create the router with all routes
    let app = create_app(server);

    // Bind and serve HTTP server
    let addr = bind_addr(&args.host, args.port)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ParokiError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!(
        "Paroki Engine server running on http://{}:{}",
        args.host, args.port
    );
    info!(
        "Health check available at: http://{}:{}/health",
        args.host, args.port
    );
    info!(
        "API v1 available at: http://{}:{}/api/v1",
        args.host, args.port
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| ParokiError::ServerError(format!("HTTP server error: {e}")))?;

    Ok(())
}

fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host
        .parse()
        .map_err(|e| ParokiError::ConfigError(format!("Invalid bind address '{host}': {e}")))?;
    Ok(SocketAddr::new(ip, port))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // Structured JSON logging in production, human-readable in development
    let is_development =
        std::env::var("PAROKI_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("paroki_server={level},tower_http=info,sqlx=warn,reqwest=info").into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_honors_loopback_host() {
        let addr = bind_addr("127.0.0.1", 8080).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bind_addr_accepts_wildcard_host() {
        let addr = bind_addr("0.0.0.0", 9090).unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 9090);
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let err = bind_addr("localhost", 8080).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
