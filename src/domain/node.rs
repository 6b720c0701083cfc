//! Tree view of a position.

use serde::{Deserialize, Serialize};

use super::{Position, PositionId};

/// A position decorated with its ordered children.
///
/// Only the hierarchy builder creates these; they are derived on every read
/// and never written back to the store.
///
/// Equality, dropping and [`PositionNode::to_json`] walk the tree with an
/// explicit stack, so a chain of any depth is safe. The derived `Serialize`
/// recurses once per level; use [`forest_json`] for unbounded depth.
#[derive(Debug, Serialize, Deserialize)]
pub struct PositionNode {
    #[serde(flatten)]
    pub position: Position,
    pub children: Vec<PositionNode>,
}

impl PositionNode {
    /// Creates a node with no children.
    pub fn leaf(position: Position) -> Self {
        Self {
            position,
            children: Vec::new(),
        }
    }

    /// Returns the id of the underlying position.
    pub fn id(&self) -> PositionId {
        self.position.id
    }

    /// Returns the name of the underlying position.
    pub fn name(&self) -> &str {
        &self.position.name
    }

    /// Returns this node's id followed by every descendant id, in pre-order.
    pub fn ids_preorder(&self) -> Vec<PositionId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(node.id());
            stack.extend(node.children.iter().rev());
        }
        ids
    }

    /// Returns the number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&PositionNode> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }

    /// Finds a node by id in this subtree, including this node.
    pub fn find(&self, id: PositionId) -> Option<&PositionNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Serializes this node and its subtree as compact JSON.
    ///
    /// Produces the same text as `serde_json::to_string` on the derived
    /// impl, without recursing per level.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        write_nodes(&mut out, std::slice::from_ref(self))?;
        Ok(out)
    }
}

impl PartialEq for PositionNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.position != b.position || a.children.len() != b.children.len() {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for PositionNode {}

impl Drop for PositionNode {
    fn drop(&mut self) {
        // Detach descendants so each node is dropped with no children left.
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Flattens a forest in pre-order.
pub fn forest_ids(forest: &[PositionNode]) -> Vec<PositionId> {
    forest.iter().flat_map(PositionNode::ids_preorder).collect()
}

/// Serializes a forest as a compact JSON array, without recursing per level.
pub fn forest_json(forest: &[PositionNode]) -> serde_json::Result<String> {
    let mut out = String::from("[");
    write_nodes(&mut out, forest)?;
    out.push(']');
    Ok(out)
}

enum Step<'a> {
    Open(&'a PositionNode),
    Comma,
    Close,
}

fn write_nodes(out: &mut String, nodes: &[PositionNode]) -> serde_json::Result<()> {
    let mut steps = Vec::new();
    push_siblings(&mut steps, nodes);
    while let Some(step) = steps.pop() {
        match step {
            Step::Open(node) => {
                // The flat fields, reopened to append `children`.
                let head = serde_json::to_string(&node.position)?;
                out.push_str(head.strip_suffix('}').unwrap_or(&head));
                out.push_str(",\"children\":[");
                steps.push(Step::Close);
                push_siblings(&mut steps, &node.children);
            }
            Step::Comma => out.push(','),
            Step::Close => out.push_str("]}"),
        }
    }
    Ok(())
}

fn push_siblings<'a>(steps: &mut Vec<Step<'a>>, nodes: &'a [PositionNode]) {
    for (index, node) in nodes.iter().enumerate().rev() {
        steps.push(Step::Open(node));
        if index > 0 {
            steps.push(Step::Comma);
        }
    }
}
