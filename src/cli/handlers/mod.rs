//! Command handlers for the CLI.

mod add;
mod edit;
mod read;
mod rm;


use anyhow::{Context, Result};
use std::path::Path;

use crate::service::{PositionError, PositionService};
use crate::store::SqliteStore;

pub use add::handle_add;
pub use edit::{edit_patch, handle_edit};
pub use read::{handle_search, handle_show, handle_tree, tree_query};
pub use rm::handle_rm;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the database at `db_path` and wraps it in a service.
pub fn open_service(db_path: &Path) -> Result<PositionService<SqliteStore>> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    Ok(PositionService::new(store))
}

/// Process exit status for a failed command.
///
/// 2 for bad input, 3 for a missing position, 1 for anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.chain().find_map(|e| e.downcast_ref::<PositionError>()) {
        Some(PositionError::Validation(_)) => 2,
        Some(PositionError::NotFound { .. }) => 3,
        Some(PositionError::Storage(_)) | None => 1,
    }
}
