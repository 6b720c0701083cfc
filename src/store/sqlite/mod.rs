//! SQLite-backed position store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed position store.
///
/// Owns one connection with foreign keys enabled and the `name_contains`
/// search function registered.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
