//! Fleet Module
//!
//! - `snapshot`: in-memory fleet passed into each evaluation
//! - `store`: persistence trait + in-memory store
//! - `sqlite`: SQLite-backed store

pub mod snapshot;
pub mod store;
pub mod sqlite;

pub use snapshot::Fleet;
pub use store::{FleetStore, MemoryFleetStore};
pub use sqlite::SqliteFleetStore;
