use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the append-only status log, as stored in `status_checks`.
///
/// MongoDB adds its own `_id`; it is ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Stamp a new record with a fresh UUID v4 and the current UTC time.
    ///
    /// BSON datetimes hold milliseconds, so the timestamp is taken at that
    /// precision up front and reads back unchanged.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: mongodb::bson::DateTime::now().to_chrono(),
        }
    }
}
