//! In-memory position store.

use std::cell::RefCell;

use tracing::debug;

use super::{PositionStore, StoreError, StoreResult};
use crate::domain::{NewPosition, Position, PositionId, PositionPatch};
use crate::hierarchy::name_matches;

#[derive(Debug, Clone, Default)]
struct Rows {
    positions: Vec<Position>,
    last_id: i64,
}

/// A [`PositionStore`] kept in a `Vec`.
///
/// Mirrors the SQLite store's constraints: blank names and unknown or self
/// parents are rejected, a row with children cannot be deleted, and ids are
/// never handed out twice. `atomically` snapshots the rows and restores them
/// when the closure fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RefCell<Rows>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `positions` as-is, without constraint checks.
    ///
    /// Useful for loading fixtures that exercise dangling or cyclic data.
    pub fn with_rows(positions: Vec<Position>) -> Self {
        let last_id = positions.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self {
            rows: RefCell::new(Rows { positions, last_id }),
        }
    }

    fn check_parent(
        rows: &Rows,
        id: Option<PositionId>,
        parentid: Option<PositionId>,
    ) -> StoreResult<()> {
        let Some(parent) = parentid else {
            return Ok(());
        };
        if Some(parent) == id {
            return Err(StoreError::Constraint(format!(
                "position {parent} cannot be its own parent"
            )));
        }
        if !rows.positions.iter().any(|p| p.id == parent) {
            return Err(StoreError::Constraint(format!(
                "parent position {parent} does not exist"
            )));
        }
        Ok(())
    }

    // Same rule as the `length(trim(name)) > 0` column check.
    fn check_name(name: &str) -> StoreResult<()> {
        if name.trim().is_empty() {
            return Err(StoreError::Constraint(
                "position name must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    fn filtered(&self, keep: impl Fn(&Position) -> bool) -> Vec<Position> {
        self.rows
            .borrow()
            .positions
            .iter()
            .filter(|p| keep(p))
            .cloned()
            .collect()
    }
}

impl PositionStore for MemoryStore {
    fn select_all(&self) -> StoreResult<Vec<Position>> {
        Ok(self.filtered(|_| true))
    }

    fn select_by_id(&self, id: PositionId) -> StoreResult<Option<Position>> {
        Ok(self.filtered(|p| p.id == id).into_iter().next())
    }

    fn select_where_parent(&self, parentid: Option<PositionId>) -> StoreResult<Vec<Position>> {
        Ok(self.filtered(|p| p.parentid == parentid))
    }

    fn select_where_name_contains(&self, needle: &str) -> StoreResult<Vec<Position>> {
        Ok(self.filtered(|p| name_matches(&p.name, needle)))
    }

    fn insert(&self, position: &NewPosition) -> StoreResult<Position> {
        Self::check_name(&position.name)?;
        let mut rows = self.rows.borrow_mut();
        Self::check_parent(&rows, None, position.parentid)?;

        rows.last_id += 1;
        let id = PositionId::new(rows.last_id)
            .map_err(|e| StoreError::Constraint(e.to_string()))?;
        let created = Position::new(
            id,
            position.name.clone(),
            position.description.clone(),
            position.parentid,
        );
        rows.positions.push(created.clone());
        debug!(%id, "inserted position");
        Ok(created)
    }

    fn update_by_id(&self, id: PositionId, patch: &PositionPatch) -> StoreResult<Option<Position>> {
        let mut rows = self.rows.borrow_mut();
        let Some(index) = rows.positions.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            Self::check_name(name)?;
        }
        if let Some(parentid) = patch.parentid {
            Self::check_parent(&rows, Some(id), parentid)?;
        }
        let updated = patch.apply_to(&rows.positions[index]);
        rows.positions[index] = updated.clone();
        Ok(Some(updated))
    }

    fn update_where_parent(
        &self,
        old_parent: PositionId,
        new_parent: Option<PositionId>,
    ) -> StoreResult<usize> {
        let mut rows = self.rows.borrow_mut();
        Self::check_parent(&rows, None, new_parent)?;
        let mut changed = 0;
        for position in rows
            .positions
            .iter_mut()
            .filter(|p| p.parentid == Some(old_parent))
        {
            position.parentid = new_parent;
            changed += 1;
        }
        Ok(changed)
    }

    fn delete_by_id(&self, id: PositionId) -> StoreResult<bool> {
        let mut rows = self.rows.borrow_mut();
        if rows.positions.iter().any(|p| p.parentid == Some(id)) {
            return Err(StoreError::Constraint(format!(
                "position {id} still has children"
            )));
        }
        let before = rows.positions.len();
        rows.positions.retain(|p| p.id != id);
        Ok(rows.positions.len() < before)
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<StoreError>,
    {
        let snapshot = self.rows.borrow().clone();
        let result = f(self);
        if result.is_err() {
            *self.rows.borrow_mut() = snapshot;
        }
        result
    }
}
