//! Goals development server.
//!
//! Serves the application's client-side contracts during local development:
//! `/api/**` is forwarded to the backend, every other path answers its
//! route-table resolution.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goals_frontend::config::{config_from_env, load_config};
use goals_frontend::dev::DevServer;
use goals_frontend::routing::{goals_routes, RouteTable};

const CONFIG_FILE: &str = "goals.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goals_frontend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("goals dev server v0.1.0 starting");

    let config = if Path::new(CONFIG_FILE).exists() {
        load_config(Path::new(CONFIG_FILE))?
    } else {
        config_from_env()?
    };

    tracing::info!(
        port = config.dev_server.port,
        proxy_prefix = %config.dev_server.proxy.path_prefix,
        proxy_target = %config.dev_server.proxy.target,
        api_base_uri = %config.api.base_uri,
        "Configuration loaded"
    );

    let table = RouteTable::new(goals_routes())?;

    // Loopback only: the dev server is not meant to be reachable from
    // outside the developer's machine.
    let listener = TcpListener::bind(("127.0.0.1", config.dev_server.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = DevServer::new(config.dev_server, table);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
