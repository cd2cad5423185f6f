use std::{fs::OpenOptions, net::SocketAddr, sync::{Arc, Mutex}};

use anyhow::{Context, Result};
use ascii_converter::{app, config::Config, SharedState, State};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated.
    let _ = dotenv();

    let config = Config::from_env()?;
    init_tracing(&config)?;
    config.log_startup();

    let shared_state: SharedState = Arc::new(State::new(config)?);
    for route in shared_state.routes.routes() {
        info!(
            "Route '{}' mounted at {}",
            route.name,
            shared_state.routes.history().join(route.path)
        );
    }

    let addr = shared_state.config.address;
    let app = app(shared_state);

    info!("Initializing service...");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind {}", addr))?;

    info!("Service now listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Unable to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}
