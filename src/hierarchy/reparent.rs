//! Replacement parent links for the children of a removed position.

use serde::Serialize;

use crate::domain::{Position, PositionId};

/// What happens to the direct children when `removed` is deleted.
///
/// Children move up one level to the removed position's former parent.
/// When the removed position was a root, `new_parent` is `None` and the
/// children become roots. Grandchildren keep their links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reparent {
    pub removed: PositionId,
    pub new_parent: Option<PositionId>,
    pub children: Vec<PositionId>,
}

impl Reparent {
    /// Plans the removal of `node`, given its direct children.
    ///
    /// Entries in `children` that do not point at `node` are ignored.
    pub fn plan(node: &Position, children: &[Position]) -> Self {
        Self {
            removed: node.id,
            new_parent: node.parentid,
            children: children
                .iter()
                .filter(|child| child.parentid == Some(node.id))
                .map(|child| child.id)
                .collect(),
        }
    }

    /// Returns true if at least one child needs a new parent link.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Applies the plan to an in-memory flat list: re-points the children and
    /// drops the removed row.
    pub fn apply(&self, positions: &mut Vec<Position>) {
        for position in positions.iter_mut() {
            if position.parentid == Some(self.removed) {
                position.parentid = self.new_parent;
            }
        }
        positions.retain(|position| position.id != self.removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(value: i64) -> PositionId {
        PositionId::new(value).unwrap()
    }

    fn pos(value: i64, parent: Option<i64>) -> Position {
        Position::new(id(value), format!("P{value}"), "", parent.map(id))
    }

    #[test]
    fn children_move_to_grandparent() {
        let cto = pos(2, Some(1));
        let plan = Reparent::plan(&cto, &[pos(3, Some(2)), pos(4, Some(2))]);
        assert_eq!(plan.removed, id(2));
        assert_eq!(plan.new_parent, Some(id(1)));
        assert_eq!(plan.children, vec![id(3), id(4)]);
        assert!(plan.has_children());
    }

    #[test]
    fn children_of_root_become_roots() {
        let plan = Reparent::plan(&pos(1, None), &[pos(2, Some(1))]);
        assert_eq!(plan.new_parent, None);
        assert_eq!(plan.children, vec![id(2)]);
    }

    #[test]
    fn leaf_has_nothing_to_reparent() {
        let plan = Reparent::plan(&pos(3, Some(2)), &[]);
        assert!(!plan.has_children());
    }

    #[test]
    fn unrelated_rows_are_ignored() {
        let plan = Reparent::plan(&pos(2, Some(1)), &[pos(3, Some(2)), pos(5, Some(1))]);
        assert_eq!(plan.children, vec![id(3)]);
    }

    #[test]
    fn apply_collapses_one_level_and_keeps_grandchildren() {
        let mut flat = vec![
            pos(1, None),
            pos(2, Some(1)),
            pos(3, Some(2)),
            pos(4, Some(3)),
        ];
        let plan = Reparent::plan(&flat[1].clone(), &[flat[2].clone()]);
        plan.apply(&mut flat);

        assert_eq!(flat, vec![pos(1, None), pos(3, Some(1)), pos(4, Some(3))]);
    }
}
