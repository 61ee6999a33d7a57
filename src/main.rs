use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use portal_api::application::ports::image_storage_port::ImageStoragePort;
use portal_api::bootstrap::app_context::{AppContext, AppServices};
use portal_api::bootstrap::config::{Config, StorageBackend};
use portal_api::infrastructure::db::repositories::event_repository_sqlx::SqlxEventRepository;
use portal_api::infrastructure::db::repositories::faculty_repository_sqlx::SqlxFacultyRepository;
use portal_api::infrastructure::storage::fs::FsImageStore;
use portal_api::infrastructure::storage::s3::S3ImageStore;
use portal_api::presentation::http::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "portal_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        storage = ?cfg.storage_backend,
        cors_origins = ?cfg.cors_origins,
        production = cfg.is_production,
        "Starting portal API"
    );

    // Database
    let pool = portal_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    portal_api::infrastructure::db::migrate(&pool).await?;

    let image_storage: Arc<dyn ImageStoragePort> = match cfg.storage_backend {
        StorageBackend::Filesystem => {
            if let Err(e) = tokio::fs::create_dir_all(&cfg.storage_root).await {
                tracing::warn!(error = ?e, dir = %cfg.storage_root, "Failed to create uploads dir");
            }
            Arc::new(FsImageStore::new(
                &cfg.storage_root,
                cfg.public_base_url.as_deref(),
            ))
        }
        StorageBackend::S3 => Arc::new(S3ImageStore::new(&cfg).await?),
    };

    let services = AppServices::new(
        Arc::new(SqlxEventRepository::new(pool.clone())),
        Arc::new(SqlxFacultyRepository::new(pool.clone())),
        image_storage,
    );
    let ctx = AppContext::new(cfg.clone(), services);
    let app = build_router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
