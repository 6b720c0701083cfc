//! Name matching and match-scoped subtrees.

use super::Forest;
use crate::domain::{Position, PositionNode};

/// Returns true if `name` contains `query`, ignoring case.
///
/// Both sides are lowercased with Unicode rules, so "ENG" matches
/// "Engineer" and "ÉQUIPE" matches "équipe". An empty query matches
/// every name.
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Returns one node per match, each carrying the match's own subtree.
///
/// The forest over `all` is indexed once and shared by every match. Results
/// follow the order of `matches`; a match absent from `all` is dropped. A
/// match that sits below another match appears both on its own and inside
/// the ancestor's subtree.
pub fn scoped_subtrees(all: &[Position], matches: &[Position]) -> Vec<PositionNode> {
    let forest = Forest::new(all);
    matches
        .iter()
        .filter_map(|found| forest.subtree(found.id))
        .collect()
}
