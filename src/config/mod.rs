//! The persisted launch configuration: record schema and self-healing store.

mod schema;
mod store;

pub use schema::ConfigRecord;
pub use store::ConfigStore;
