use anyhow::Result;
use reqwest::Client;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use ai_gateway::{AppState, build_router, config::Config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env()?;

    let http_client = Client::builder()
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.idle_connection_timeout)
        .build()?;

    if config.dev_mode {
        warn!("DEV MODE ENABLED - request bodies will be logged");
    }

    let listen_addr = config.listen_addr();
    let state = AppState::new(config, http_client);
    info!("Using AI Provider: {}", state.provider.name());

    let app = build_router(state);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("AI Service listening at http://{listen_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("AI Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
