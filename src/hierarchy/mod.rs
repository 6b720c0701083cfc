//! Hierarchy engine: tree building, re-parenting, parent checks, search and paging.
//!
//! Everything here is pure and works on flat `Position` slices fetched from a
//! store; nothing is cached between calls.

mod ancestry;
mod builder;
mod page;
mod reparent;
mod search;

pub use ancestry::{ParentCheck, ancestors, check_parent};
pub use builder::{Forest, build};
pub use page::{Page, PageError, PageScope, paginate};
pub use reparent::Reparent;
pub use search::{name_matches, scoped_subtrees};
