use crate::models::StatusCheck;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusCheckRequest {
    #[validate(length(min = 1, message = "client_name must not be empty"))]
    pub client_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name,
            timestamp: check.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
