//! Flat position storage: the store trait, SQLite and in-memory backends

mod memory;
mod repository;
mod schema;
mod sqlite;

pub use memory::MemoryStore;
pub use repository::{PositionStore, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::{SqliteStore, Transaction};
