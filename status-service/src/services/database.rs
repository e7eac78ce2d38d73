use crate::models::StatusCheck;
use crate::services::store::StatusStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// Schema is enforced by `StatusCheck` alone; the collection carries no
/// indexes or validators beyond MongoDB's default `_id`.
#[derive(Clone)]
pub struct MongoStatusStore {
    client: MongoClient,
    db: Database,
    closed: Arc<AtomicBool>,
}

impl MongoStatusStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            // The URI may carry credentials; keep it out of the log line.
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self {
            client,
            db,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection(STATUS_CHECKS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    /// Callers log the failure.
    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks().insert_one(check, None).await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.status_checks().find(None, options).await?;
        let checks: Vec<StatusCheck> = cursor.try_collect().await?;
        Ok(checks)
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
