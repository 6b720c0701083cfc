//! Plain-text rendering of positions and trees.

use std::fmt::Write;

use crate::domain::{Position, PositionNode};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// One-line label used in every human listing.
pub fn label(position: &Position) -> String {
    if position.description.is_empty() {
        format!("{} [{}]", position.name, position.id)
    } else {
        format!(
            "{} [{}] - {}",
            position.name, position.id, position.description
        )
    }
}

/// Renders a forest with box-drawing connectors, one position per line.
///
/// Top-level nodes are printed flush left; their descendants hang below.
/// Walks with an explicit stack, so depth is bounded only by memory.
pub fn forest(nodes: &[PositionNode]) -> String {
    let mut out = String::new();
    let mut pending = Vec::new();
    for node in nodes {
        let _ = writeln!(out, "{}", label(&node.position));
        push_children(&mut pending, &node.children, "");

        while let Some((node, prefix, last)) = pending.pop() {
            let connector = if last { LAST } else { BRANCH };
            let _ = writeln!(out, "{prefix}{connector}{}", label(&node.position));

            let nested = format!("{prefix}{}", if last { GAP } else { PIPE });
            push_children(&mut pending, &node.children, &nested);
        }
    }
    out
}

// Reversed so the first child pops first.
fn push_children<'a>(
    pending: &mut Vec<(&'a PositionNode, String, bool)>,
    nodes: &'a [PositionNode],
    prefix: &str,
) {
    for (index, node) in nodes.iter().enumerate().rev() {
        pending.push((node, prefix.to_string(), index + 1 == nodes.len()));
    }
}

/// Renders ancestors as `Root > ... > Parent`, farthest first.
pub fn breadcrumb(ancestors: &[Position]) -> Option<String> {
    if ancestors.is_empty() {
        return None;
    }
    let names: Vec<&str> = ancestors.iter().rev().map(|p| p.name.as_str()).collect();
    Some(names.join(" > "))
}
