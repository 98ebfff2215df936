use std::sync::Arc;

use addrbook_geo::ProximityEngine;
use addrbook_store::memory::MemoryRecordStore;
use addrbook_store::ports::RecordStore;
use addrbook_store::postgres::{PostgresConfig, PostgresStore};
use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use addrbook_api::logging::init_logging;
use addrbook_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    let _log_guard = init_logging(&config.log)?;

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        log_level = %config.log.level,
        log_format = %config.log.format,
        log_dir = ?config.log.dir,
        storage = if config.uses_postgres() { "postgres" } else { "memory" },
        "Starting address book API server"
    );

    // Initialize storage backend based on DATABASE_URL
    let (store, backend): (Arc<dyn RecordStore>, &'static str) = match &config.database_url {
        Some(database_url) => {
            tracing::info!("DATABASE_URL found, connecting to PostgreSQL...");
            match init_postgres_storage(database_url).await {
                Ok(store) => (store, "postgres"),
                Err(e) => {
                    tracing::error!("Failed to connect to PostgreSQL: {:#}", e);
                    tracing::error!(
                        "Remediation:\n\
                        1. Ensure PostgreSQL is running\n\
                        2. Verify DATABASE_URL is correct\n\
                        3. Check that the database exists and is accessible"
                    );
                    return Err(e);
                }
            }
        }
        None => {
            tracing::info!("Using in-memory storage (set DATABASE_URL for PostgreSQL)");
            let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
            (store, "memory")
        }
    };

    let state = Arc::new(AppState::new(
        store,
        ProximityEngine::default(),
        backend,
        config.default_page_limit,
    ));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid ADDRBOOK_CORS_ORIGIN '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize PostgreSQL storage from a database URL
async fn init_postgres_storage(database_url: &str) -> anyhow::Result<Arc<dyn RecordStore>> {
    let config = PostgresConfig::new(database_url).context("Invalid DATABASE_URL")?;
    let store = PostgresStore::connect(config).await.context("Connection failed")?;
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
