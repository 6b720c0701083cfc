//! Position service: create, read, update, delete and search.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{PositionError, PositionResult};
use crate::domain::{NewPosition, Position, PositionId, PositionNode, PositionPatch};
use crate::hierarchy::{
    Forest, Page, PageScope, ParentCheck, Reparent, ancestors, build, check_parent, paginate,
    scoped_subtrees,
};
use crate::store::PositionStore;

/// Message returned alongside the id of a deleted position.
pub const DELETED_MESSAGE: &str = "Position deleted successfully!";

/// Page size used when a page number is given without a limit.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Options for reading the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub page: Option<usize>,
    pub scope: PageScope,
}

impl HierarchyQuery {
    /// Creates a query for the whole forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by name. Pagination is ignored when a non-blank search is set.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the 1-indexed page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets what the page window applies to.
    pub fn scope(mut self, scope: PageScope) -> Self {
        self.scope = scope;
        self
    }

    fn window(&self) -> PositionResult<Option<Page>> {
        match (self.limit, self.page) {
            (None, None) => Ok(None),
            (limit, page) => Ok(Some(Page::new(
                limit.unwrap_or(DEFAULT_PAGE_SIZE),
                page.unwrap_or(1),
            )?)),
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: PositionId,
}

impl From<&Reparent> for DeleteResponse {
    fn from(removal: &Reparent) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            id: removal.removed,
        }
    }
}

/// Orchestrates the hierarchy engine against an injected store.
pub struct PositionService<S> {
    store: S,
}

impl<S: PositionStore> PositionService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service and returns the store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ===========================================
    // Create
    // ===========================================

    /// Creates a position.
    ///
    /// # Errors
    ///
    /// [`PositionError::Validation`] if `name` or `description` is blank or
    /// the parent does not exist. Nothing is written in that case.
    pub fn create(&self, input: &NewPosition) -> PositionResult<Position> {
        require("name", &input.name)?;
        require("description", &input.description)?;

        let created = self.store.atomically(|store| -> PositionResult<Position> {
            if let Some(parent) = input.parentid
                && store.select_by_id(parent)?.is_none()
            {
                return Err(PositionError::validation(format!(
                    "parent position {parent} does not exist"
                )));
            }
            Ok(store.insert(input)?)
        })?;

        info!(id = %created.id, parent = ?created.parentid, "created position");
        Ok(created)
    }

    // ===========================================
    // Read
    // ===========================================

    /// Returns the hierarchy, optionally filtered by name or paged.
    ///
    /// With a non-blank `search`, this is [`Self::search`] and paging is
    /// ignored. With a page under [`PageScope::Flat`], the flat list is cut
    /// before the tree is built, so parents and children on other pages are
    /// missing from the result.
    pub fn hierarchy(&self, query: &HierarchyQuery) -> PositionResult<Vec<PositionNode>> {
        if let Some(search) = query.search.as_deref()
            && !search.trim().is_empty()
        {
            return self.search(search);
        }

        let window = query.window()?;
        let all = self.store.select_all()?;
        debug!(positions = all.len(), ?window, "building hierarchy");

        Ok(match window {
            Some(page) => paginate(&all, page, query.scope),
            None => build(&all, None),
        })
    }

    /// Returns the position with `id` and its full subtree.
    pub fn get(&self, id: PositionId) -> PositionResult<PositionNode> {
        let all = self.store.select_all()?;
        Forest::new(&all)
            .subtree(id)
            .ok_or(PositionError::NotFound { id })
    }

    /// Returns the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: PositionId) -> PositionResult<Vec<Position>> {
        let all = self.store.select_all()?;
        let forest = Forest::new(&all);
        if !forest.contains(id) {
            return Err(PositionError::NotFound { id });
        }
        Ok(ancestors(&forest, id)
            .into_iter()
            .filter_map(|ancestor| forest.get(ancestor).cloned())
            .collect())
    }

    /// Finds positions whose name contains `query`, ignoring case, and
    /// returns each match with its own subtree.
    ///
    /// # Errors
    ///
    /// [`PositionError::Validation`] if `query` is blank.
    pub fn search(&self, query: &str) -> PositionResult<Vec<PositionNode>> {
        if query.trim().is_empty() {
            return Err(PositionError::validation("search query is required"));
        }

        let matches = self.store.select_where_name_contains(query)?;
        debug!(query, matches = matches.len(), "searched positions");
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let all = self.store.select_all()?;
        Ok(scoped_subtrees(&all, &matches))
    }

    // ===========================================
    // Update
    // ===========================================

    /// Applies `patch` to the position with `id` and returns the updated row.
    ///
    /// Children are never re-parented by an update.
    ///
    /// # Errors
    ///
    /// [`PositionError::NotFound`] if `id` does not exist.
    /// [`PositionError::Validation`] if the new name is blank, or the new
    /// parent is missing, is the position itself, or is one of its
    /// descendants.
    pub fn update(&self, id: PositionId, patch: &PositionPatch) -> PositionResult<Position> {
        if let Some(name) = &patch.name {
            require("name", name)?;
        }

        let updated = self.store.atomically(|store| -> PositionResult<Position> {
            let current = store
                .select_by_id(id)?
                .ok_or(PositionError::NotFound { id })?;
            if patch.is_empty() {
                return Ok(current);
            }

            if let Some(Some(parent)) = patch.parentid {
                let all = store.select_all()?;
                match check_parent(&Forest::new(&all), Some(id), parent) {
                    ParentCheck::Valid => {}
                    ParentCheck::MissingParent => {
                        return Err(PositionError::validation(format!(
                            "parent position {parent} does not exist"
                        )));
                    }
                    ParentCheck::SelfParent => {
                        return Err(PositionError::validation(format!(
                            "position {id} cannot be its own parent"
                        )));
                    }
                    ParentCheck::Cycle => {
                        return Err(PositionError::validation(format!(
                            "moving position {id} under {parent} would create a cycle"
                        )));
                    }
                }
            }

            store
                .update_by_id(id, patch)?
                .ok_or(PositionError::NotFound { id })
        })?;

        info!(id = %updated.id, parent = ?updated.parentid, "updated position");
        Ok(updated)
    }

    // ===========================================
    // Delete
    // ===========================================

    /// Deletes the position with `id`, moving its direct children up to its
    /// former parent first.
    ///
    /// Re-parenting and removal happen in one transaction: either both are
    /// applied or the store is left unchanged. Returns the applied plan.
    ///
    /// # Errors
    ///
    /// [`PositionError::NotFound`] if `id` does not exist.
    pub fn delete(&self, id: PositionId) -> PositionResult<Reparent> {
        let removal = self.store.atomically(|store| -> PositionResult<Reparent> {
            let node = store
                .select_by_id(id)?
                .ok_or(PositionError::NotFound { id })?;
            let children = store.select_where_parent(Some(id))?;
            let plan = Reparent::plan(&node, &children);

            if plan.has_children() {
                store.update_where_parent(id, plan.new_parent)?;
            }
            if !store.delete_by_id(id)? {
                return Err(PositionError::NotFound { id });
            }
            Ok(plan)
        })?;

        info!(
            id = %removal.removed,
            promoted_to = ?removal.new_parent,
            reparented = removal.children.len(),
            "deleted position"
        );
        Ok(removal)
    }
}

fn require(field: &str, value: &str) -> PositionResult<()> {
    if value.trim().is_empty() {
        return Err(PositionError::validation(format!("{field} is required")));
    }
    Ok(())
}
