pub mod health;
pub mod status;

pub use health::HealthResponse;
pub use status::{CreateStatusCheckRequest, RootResponse, StatusCheckResponse};
