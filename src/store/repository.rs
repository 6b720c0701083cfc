//! PositionStore trait and store error types.

use crate::domain::{NewPosition, Position, PositionId, PositionPatch};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a position store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A write would break referential integrity or another store constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Flat CRUD access to the positions table.
///
/// Implementations know nothing about trees: they store rows with a parent
/// link and answer equality and substring queries. All listing methods
/// return rows in ascending id order, which is creation order.
///
/// Methods take `&self`; implementations manage their own interior state so
/// that [`PositionStore::atomically`] can hand the same store to the closure.
pub trait PositionStore {
    /// Returns every position.
    fn select_all(&self) -> StoreResult<Vec<Position>>;

    /// Returns the position with `id`, if any.
    fn select_by_id(&self, id: PositionId) -> StoreResult<Option<Position>>;

    /// Returns the positions whose parent link equals `parentid`
    /// (`None` selects the roots).
    fn select_where_parent(&self, parentid: Option<PositionId>) -> StoreResult<Vec<Position>>;

    /// Returns the positions whose name contains `needle`, ignoring case.
    fn select_where_name_contains(&self, needle: &str) -> StoreResult<Vec<Position>>;

    /// Inserts a row and returns it with its assigned id.
    fn insert(&self, position: &NewPosition) -> StoreResult<Position>;

    /// Applies `patch` to the row with `id` and returns the post-update row,
    /// or `None` if there is no such row.
    fn update_by_id(&self, id: PositionId, patch: &PositionPatch) -> StoreResult<Option<Position>>;

    /// Re-points every row whose parent is `old_parent` to `new_parent` in a
    /// single statement. Returns the number of rows changed.
    fn update_where_parent(
        &self,
        old_parent: PositionId,
        new_parent: Option<PositionId>,
    ) -> StoreResult<usize>;

    /// Deletes the row with `id`. Returns `false` if it did not exist.
    fn delete_by_id(&self, id: PositionId) -> StoreResult<bool>;

    /// Runs `f` as one unit of work.
    ///
    /// Every write made through the store inside `f` is committed when `f`
    /// returns `Ok` and discarded when it returns `Err`. A call nested inside
    /// another `atomically` joins the outer unit.
    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<StoreError>;
}
