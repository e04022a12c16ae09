use anyhow::Result;
use hello_metrics::{bind_listener, create_router, shutdown_signal, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        error!("Fatal: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // ---
    let config = AppConfig::from_env()?;
    let app = create_router()?;

    let listener = bind_listener(&config.server.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    info!("Starting hello-metrics server v{}...", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
