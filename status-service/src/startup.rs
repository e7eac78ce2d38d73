//! Router construction and server lifecycle.

use crate::config::{StatusConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryStatusStore, MongoStatusStore, StatusStore};
use crate::SERVICE_TITLE;
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatusStore>,
}

/// Register every (method, path) pair explicitly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/health", get(handlers::health_check))
        .route(
            "/api/status",
            get(handlers::list_status_checks).post(handlers::create_status_check),
        )
        .route("/metrics", get(handlers::metrics_endpoint))
        // `layer` rather than `route_layer` so fallback 404s are counted too.
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id_middleware))
        // Mirrors origin, method and headers with credentials allowed.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Open the configured store and bind the listener. With the MongoDB
    /// backend an unreachable database aborts startup before anything binds.
    pub async fn build(config: StatusConfig) -> Result<Self, AppError> {
        let store: Arc<dyn StatusStore> = match config.store {
            StoreBackend::Mongo => {
                let store =
                    MongoStatusStore::connect(&config.mongodb.uri, &config.mongodb.database)
                        .await
                        .map_err(|e| {
                            tracing::error!("Failed to connect to MongoDB: {}", e);
                            e
                        })?;

                store.ping().await.map_err(|e| {
                    tracing::error!("MongoDB is unreachable at startup: {}", e);
                    e
                })?;

                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory status store; records are lost on exit");
                Arc::new(InMemoryStatusStore::new())
            }
        };

        Self::build_with_store(config, store).await
    }

    /// Bind the listener around an already constructed store.
    pub async fn build_with_store(
        config: StatusConfig,
        store: Arc<dyn StatusStore>,
    ) -> Result<Self, AppError> {
        let addr = config.common.address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}:{}", config.common.host, port);

        Ok(Self {
            port,
            listener,
            state: AppState { store },
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests and
    /// close the store.
    pub async fn run_until_stopped<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("{} starting up...", SERVICE_TITLE);

        let store = self.state.store.clone();
        let app = build_router(self.state);
        let result = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Err(e) = &result {
            tracing::error!("HTTP server error: {}", e);
        }

        tracing::info!("{} shutting down...", SERVICE_TITLE);
        store.close().await;

        result
    }
}
