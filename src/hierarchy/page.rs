//! Page windows over positions.

use thiserror::Error;

use super::build;
use crate::domain::{Position, PositionNode};

/// Errors for malformed page requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page limit must be at least 1")]
    ZeroLimit,

    #[error("page numbers start at 1")]
    ZeroPage,
}

/// A 1-indexed window of `limit` items.
///
/// Only [`Page::new`] constructs one, so `limit` and `page` are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: usize,
    page: usize,
}

impl Page {
    /// Creates a window, rejecting a zero limit or page number.
    pub fn new(limit: usize, page: usize) -> Result<Self, PageError> {
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        if page == 0 {
            return Err(PageError::ZeroPage);
        }
        Ok(Self { limit, page })
    }

    /// Returns the page size.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the 1-indexed page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of items skipped before this window.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Slices `items` to this window. A window past the end is empty.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

/// What a page window is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageScope {
    /// Slice the flat list before building.
    ///
    /// A position on the page whose parent is off the page is not returned,
    /// and children that fall off the page are missing from their parent.
    #[default]
    Flat,

    /// Build the whole forest, then slice its top-level roots. Every
    /// returned root keeps its complete subtree.
    Roots,
}

/// Builds the paged tree view of `all`.
pub fn paginate(all: &[Position], page: Page, scope: PageScope) -> Vec<PositionNode> {
    match scope {
        PageScope::Flat => build(page.window(all), None),
        PageScope::Roots => build(all, None)
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PositionId, forest_ids};
    use pretty_assertions::assert_eq;

    fn id(value: i64) -> PositionId {
        PositionId::new(value).unwrap()
    }

    fn pos(value: i64, parent: Option<i64>) -> Position {
        Position::new(id(value), format!("P{value}"), "", parent.map(id))
    }

    /// Roots 1, 4, 6. 1 -> 2 -> 3, 4 -> 5
    fn org() -> Vec<Position> {
        vec![
            pos(1, None),
            pos(2, Some(1)),
            pos(3, Some(2)),
            pos(4, None),
            pos(5, Some(4)),
            pos(6, None),
        ]
    }

    #[test]
    fn rejects_zero_limit_and_page() {
        assert_eq!(Page::new(0, 1), Err(PageError::ZeroLimit));
        assert_eq!(Page::new(5, 0), Err(PageError::ZeroPage));
    }

    #[test]
    fn window_slices_by_page() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(Page::new(2, 1).unwrap().window(&items), &[1, 2]);
        assert_eq!(Page::new(2, 2).unwrap().window(&items), &[3, 4]);
        assert_eq!(Page::new(2, 3).unwrap().window(&items), &[5]);
    }

    #[test]
    fn window_past_end_is_empty() {
        let items = [1, 2, 3];
        assert!(Page::new(2, 5).unwrap().window(&items).is_empty());
        assert!(Page::new(usize::MAX, 3).unwrap().window(&items).is_empty());
    }

    #[test]
    fn offset_counts_skipped_items() {
        let page = Page::new(10, 3).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.page(), 3);
    }

    #[test]
    fn flat_scope_cuts_children_off_the_page() {
        let forest = paginate(&org(), Page::new(2, 1).unwrap(), PageScope::Flat);
        // 1 and 2 are on the page, 3 is not.
        assert_eq!(forest_ids(&forest), vec![id(1), id(2)]);
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn flat_scope_drops_nodes_whose_parent_is_off_the_page() {
        let forest = paginate(&org(), Page::new(2, 2).unwrap(), PageScope::Flat);
        // Page holds 3 (parent 2 off page) and 4 (a root).
        assert_eq!(forest_ids(&forest), vec![id(4)]);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn roots_scope_keeps_full_subtrees() {
        let forest = paginate(&org(), Page::new(2, 1).unwrap(), PageScope::Roots);
        assert_eq!(
            forest_ids(&forest),
            vec![id(1), id(2), id(3), id(4), id(5)]
        );

        let second = paginate(&org(), Page::new(2, 2).unwrap(), PageScope::Roots);
        assert_eq!(forest_ids(&second), vec![id(6)]);
    }

    #[test]
    fn roots_scope_past_end_is_empty() {
        let forest = paginate(&org(), Page::new(2, 9).unwrap(), PageScope::Roots);
        assert!(forest.is_empty());
        let huge = paginate(&org(), Page::new(usize::MAX, 2).unwrap(), PageScope::Roots);
        assert!(huge.is_empty());
    }

    #[test]
    fn offset_is_defined_for_every_constructible_page() {
        assert_eq!(Page::new(5, 1).unwrap().offset(), 0);
        assert_eq!(Page::new(usize::MAX, usize::MAX).unwrap().offset(), usize::MAX);
    }

    #[test]
    fn default_scope_is_flat() {
        assert_eq!(PageScope::default(), PageScope::Flat);
    }
}
