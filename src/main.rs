use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use wp_nexus_gateway::{app, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Refuses to start without a database URL and an API token
    let config = GatewayConfig::from_env()?;

    let state = AppState::from_config(&config)?;
    tracing::info!(
        pool_max = config.pool_max,
        connect_timeout_secs = config.connect_timeout.as_secs(),
        "Database pool configured (connections open on first use)"
    );

    if config.auto_setup_db {
        match state.db.bootstrap_schema().await {
            Ok(()) => tracing::info!("Database schema initialized at startup"),
            Err(e) => tracing::error!("Failed to initialize database schema: {:#}", e),
        }
    }

    let app = app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
