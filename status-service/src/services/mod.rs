pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoStatusStore;
pub use memory::InMemoryStatusStore;
pub use self::metrics::{get_metrics, init_metrics};
pub use store::{StatusStore, MAX_STATUS_CHECKS};
