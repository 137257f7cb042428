use std::net::SocketAddr;
use std::sync::Arc;

use journitag_backend::{config::Config, create_app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journitag_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // The upload folder must exist before the first photo is written
    tokio::fs::create_dir_all(&config.upload_folder).await?;

    // Open database pool (creates the file on first run)
    if let Some(parent) = config.database_filename.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tracing::info!("Using database at {}", config.database_filename.display());
    let pool = db::create_pool(&config).await?;

    let port = config.port;
    let app = create_app(Arc::new(config), pool);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("journitag backend listening on {}", addr);
    tracing::info!("API docs available at http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
