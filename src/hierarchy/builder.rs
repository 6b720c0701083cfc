//! Forest reconstruction from flat parent links.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Position, PositionId, PositionNode};

/// Builds the tree view of `all` below `root`.
///
/// With `root = None` this returns the top-level roots, each carrying its
/// full subtree. With `root = Some(x)` it returns x's direct children, not a
/// node wrapping x. Sibling order follows the order of `all`.
///
/// A position whose parent is missing from `all` is never attached to
/// another node; it is only returned when `root` names that missing parent.
///
/// # Examples
///
/// ```
/// use orgtree::domain::{Position, PositionId};
/// use orgtree::hierarchy::build;
///
/// let id = |v| PositionId::new(v).unwrap();
/// let flat = vec![
///     Position::new(id(1), "CEO", "", None),
///     Position::new(id(2), "CTO", "", Some(id(1))),
/// ];
/// let forest = build(&flat, None);
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].children[0].name(), "CTO");
/// ```
pub fn build(all: &[Position], root: Option<PositionId>) -> Vec<PositionNode> {
    Forest::new(all).roots_under(root)
}

/// Parent/child index over a borrowed flat list.
///
/// Indexing is done once; every materialization hands out fresh owned
/// nodes, so the input is never mutated and repeated views are independent.
pub struct Forest<'a> {
    nodes: &'a [Position],
    by_id: HashMap<PositionId, usize>,
    children: HashMap<PositionId, Vec<usize>>,
}

impl<'a> Forest<'a> {
    /// Indexes `nodes` by id and links every node to a parent present in the list.
    pub fn new(nodes: &'a [Position]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            by_id.entry(node.id).or_insert(index);
        }

        let mut children: HashMap<PositionId, Vec<usize>> = HashMap::new();
        for (index, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parentid
                && by_id.contains_key(&parent)
            {
                children.entry(parent).or_default().push(index);
            }
        }

        debug!(
            nodes = nodes.len(),
            parents = children.len(),
            "indexed position forest"
        );

        Self {
            nodes,
            by_id,
            children,
        }
    }

    /// Returns the number of indexed positions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` is present.
    pub fn contains(&self, id: PositionId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Looks up the flat record for `id`.
    pub fn get(&self, id: PositionId) -> Option<&'a Position> {
        self.by_id.get(&id).map(|&index| &self.nodes[index])
    }

    /// Materializes every position whose parent link equals `root`.
    pub fn roots_under(&self, root: Option<PositionId>) -> Vec<PositionNode> {
        let mut visited = HashSet::new();
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parentid == root)
            .filter_map(|(index, _)| self.materialize(index, &mut visited))
            .collect()
    }

    /// Materializes the subtree rooted at `id`, or `None` if `id` is absent.
    pub fn subtree(&self, id: PositionId) -> Option<PositionNode> {
        let index = *self.by_id.get(&id)?;
        self.materialize(index, &mut HashSet::new())
    }

    /// Returns the direct children of `id` in sibling order.
    pub fn children_of(&self, id: PositionId) -> impl Iterator<Item = &'a Position> + '_ {
        self.children
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&index| &self.nodes[index])
    }

    fn child_indices(&self, index: usize) -> &[usize] {
        self.children
            .get(&self.nodes[index].id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Builds bottom-up with an explicit stack: a frame is popped once all of
    // its children are assembled, then handed to its parent frame. Each index
    // is emitted at most once per materialization, which keeps a corrupted
    // cyclic parent chain from looping.
    fn materialize(&self, root: usize, visited: &mut HashSet<usize>) -> Option<PositionNode> {
        if !visited.insert(root) {
            return None;
        }
        let mut stack = vec![Frame::new(root)];
        loop {
            let frame = stack.last_mut()?;
            if let Some(&child) = self.child_indices(frame.index).get(frame.next) {
                frame.next += 1;
                if visited.insert(child) {
                    stack.push(Frame::new(child));
                }
                continue;
            }

            let done = stack.pop()?;
            let node = PositionNode {
                position: self.nodes[done.index].clone(),
                children: done.children,
            };
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => return Some(node),
            }
        }
    }
}

struct Frame {
    index: usize,
    next: usize,
    children: Vec<PositionNode>,
}

impl Frame {
    fn new(index: usize) -> Self {
        Self {
            index,
            next: 0,
            children: Vec::new(),
        }
    }
}
