#![allow(dead_code)]

use service_core::config::Config as CoreConfig;
use status_service::config::{LogConfig, MongoConfig, StatusConfig, StoreBackend};
use status_service::services::{InMemoryStatusStore, StatusStore};
use status_service::startup::Application;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStatusStore>,
    shutdown_tx: oneshot::Sender<()>,
    server: JoinHandle<std::io::Result<()>>,
}

pub fn test_config() -> StatusConfig {
    StatusConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port for testing
        },
        mongodb: MongoConfig {
            uri: std::env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("status_test_{}", Uuid::new_v4()),
        },
        log: LogConfig::default(),
        store: StoreBackend::Memory,
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryStatusStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<InMemoryStatusStore>) -> Self {
        let dyn_store: Arc<dyn StatusStore> = store.clone();
        let app = Application::build_with_store(test_config(), dyn_store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_until_stopped(async move {
            shutdown_rx.await.ok();
        }));

        // Wait for HTTP server to be ready by polling the greeting endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/api/", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            store,
            shutdown_tx,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_status(&self, client_name: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.url("/api/status"))
            .json(&serde_json::json!({ "client_name": client_name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_status(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(self.url("/api/status"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    pub async fn stop(self) -> Arc<InMemoryStatusStore> {
        let _ = self.shutdown_tx.send(());
        self.server
            .await
            .expect("Server task panicked")
            .expect("Server exited with an error");
        self.store
    }
}
