//! Parent-link validation by walking the ancestor chain.

use super::Forest;
use crate::domain::PositionId;

/// Outcome of checking a proposed parent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentCheck {
    /// The link keeps the forest acyclic and points at an existing position.
    Valid,
    /// The proposed parent does not exist.
    MissingParent,
    /// The position would become its own parent.
    SelfParent,
    /// The proposed parent is a descendant of the position.
    Cycle,
}

impl ParentCheck {
    /// Returns true for [`ParentCheck::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Checks whether `child` may point at `parent`.
///
/// `child` is `None` for a position that does not exist yet; such a position
/// has no descendants, so only existence of `parent` matters.
///
/// The walk follows parent links upward from `parent` and stops after as many
/// steps as there are positions. A chain that is still going at that point
/// already loops and is reported as [`ParentCheck::Cycle`].
pub fn check_parent(forest: &Forest<'_>, child: Option<PositionId>, parent: PositionId) -> ParentCheck {
    if child == Some(parent) {
        return ParentCheck::SelfParent;
    }
    if !forest.contains(parent) {
        return ParentCheck::MissingParent;
    }
    let Some(child) = child else {
        return ParentCheck::Valid;
    };

    let mut current = parent;
    for _ in 0..=forest.len() {
        match forest.get(current).and_then(|p| p.parentid) {
            Some(next) if next == child => return ParentCheck::Cycle,
            Some(next) => current = next,
            None => return ParentCheck::Valid,
        }
    }
    ParentCheck::Cycle
}

/// Returns the ancestors of `id`, nearest first, stopping at a root, a
/// missing parent, or after as many steps as there are positions.
pub fn ancestors(forest: &Forest<'_>, id: PositionId) -> Vec<PositionId> {
    let mut chain = Vec::new();
    let mut current = forest.get(id).and_then(|p| p.parentid);
    while let Some(next) = current {
        if chain.len() >= forest.len() || !forest.contains(next) {
            break;
        }
        chain.push(next);
        current = forest.get(next).and_then(|p| p.parentid);
    }
    chain
}
