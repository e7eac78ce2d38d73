//! In-process store for tests and database-less local runs.

use crate::models::StatusCheck;
use crate::services::store::StatusStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Insertion-ordered store that can be switched "unreachable" to exercise
/// the failure paths.
pub struct InMemoryStatusStore {
    checks: RwLock<Vec<StatusCheck>>,
    available: AtomicBool,
    close_calls: AtomicUsize,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self {
            checks: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
            close_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.checks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.checks.read().await.is_empty()
    }

    /// How many times `close` has been called.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store is unavailable"
            )))
        }
    }
}

impl Default for InMemoryStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.ensure_available()
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.ensure_available()?;
        self.checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        self.ensure_available()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.checks.read().await.iter().take(limit).cloned().collect())
    }

    async fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
