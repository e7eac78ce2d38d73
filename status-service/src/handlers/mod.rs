pub mod health;
pub mod metrics;
pub mod root;
pub mod status;

pub use health::health_check;
pub use self::metrics::metrics_endpoint;
pub use root::root;
pub use status::{create_status_check, list_status_checks};
