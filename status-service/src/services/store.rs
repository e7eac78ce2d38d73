use crate::models::StatusCheck;
use async_trait::async_trait;
use service_core::error::AppError;

/// Upper bound on records returned by a single list call.
pub const MAX_STATUS_CHECKS: i64 = 1000;

/// Storage handle shared by every request.
///
/// Built once at startup, injected through `AppState`, and closed once when
/// the server stops.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Cheap liveness check against the backend.
    async fn ping(&self) -> Result<(), AppError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;

    /// Up to `limit` records in storage order. No sort is applied.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError>;

    /// Release the backend connection.
    async fn close(&self);
}
