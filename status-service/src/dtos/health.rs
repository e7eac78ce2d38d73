use serde::Serialize;

/// Body of `GET /api/health`. Always served with 200.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            database: "connected",
            error: None,
        }
    }

    /// The driver error is logged, never echoed to the caller.
    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy",
            database: "disconnected",
            error: Some("database unreachable"),
        }
    }
}
