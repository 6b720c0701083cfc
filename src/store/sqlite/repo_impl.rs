//! PositionStore trait implementation for SqliteStore.

use super::{SqliteStore, Transaction};
use crate::domain::{NewPosition, Position, PositionId, PositionPatch};
use crate::store::{PositionStore, StoreError, StoreResult};
use rusqlite::{OptionalExtension, Row, params};
use tracing::{debug, warn};

const COLUMNS: &str = "id, name, description, parentid";

fn position_from_row(row: &Row<'_>) -> rusqlite::Result<Position> {
    Ok(Position {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        parentid: row.get(3)?,
    })
}

impl SqliteStore {
    fn select(&self, filter: &str, params: impl rusqlite::Params) -> StoreResult<Vec<Position>> {
        let sql = format!("SELECT {COLUMNS} FROM positions {filter} ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params, position_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

impl PositionStore for SqliteStore {
    fn select_all(&self) -> StoreResult<Vec<Position>> {
        self.select("", [])
    }

    fn select_by_id(&self, id: PositionId) -> StoreResult<Option<Position>> {
        let position = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM positions WHERE id = ?1"),
                [id],
                position_from_row,
            )
            .optional()?;
        Ok(position)
    }

    fn select_where_parent(&self, parentid: Option<PositionId>) -> StoreResult<Vec<Position>> {
        // IS matches NULL as well as concrete ids
        self.select("WHERE parentid IS ?1", [parentid])
    }

    fn select_where_name_contains(&self, needle: &str) -> StoreResult<Vec<Position>> {
        self.select("WHERE name_contains(name, ?1)", [needle])
    }

    fn insert(&self, position: &NewPosition) -> StoreResult<Position> {
        let created = self.conn.query_row(
            &format!(
                "INSERT INTO positions (name, description, parentid) VALUES (?1, ?2, ?3)
                 RETURNING {COLUMNS}"
            ),
            params![position.name, position.description, position.parentid],
            position_from_row,
        )?;
        debug!(id = %created.id, parent = ?created.parentid, "inserted position");
        Ok(created)
    }

    fn update_by_id(&self, id: PositionId, patch: &PositionPatch) -> StoreResult<Option<Position>> {
        let (set_parent, parentid) = match patch.parentid {
            Some(parentid) => (true, parentid),
            None => (false, None),
        };
        let updated = self
            .conn
            .query_row(
                &format!(
                    "UPDATE positions SET
                         name = COALESCE(?2, name),
                         description = COALESCE(?3, description),
                         parentid = CASE WHEN ?4 THEN ?5 ELSE parentid END
                     WHERE id = ?1
                     RETURNING {COLUMNS}"
                ),
                params![id, patch.name, patch.description, set_parent, parentid],
                position_from_row,
            )
            .optional()?;
        Ok(updated)
    }

    fn update_where_parent(
        &self,
        old_parent: PositionId,
        new_parent: Option<PositionId>,
    ) -> StoreResult<usize> {
        let changed = self.conn.execute(
            "UPDATE positions SET parentid = ?2 WHERE parentid = ?1",
            params![old_parent, new_parent],
        )?;
        debug!(%old_parent, ?new_parent, changed, "re-pointed children");
        Ok(changed)
    }

    fn delete_by_id(&self, id: PositionId) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM positions WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<StoreError>,
    {
        if !self.conn.is_autocommit() {
            return f(self);
        }

        let tx = Transaction::begin(&self.conn)?;
        match f(self) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback() {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }
}
