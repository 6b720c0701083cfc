//! Position service: validation, orchestration and error semantics over a store

mod error;
mod positions;


pub use error::{PositionError, PositionResult};
pub use positions::{
    DEFAULT_PAGE_SIZE, DELETED_MESSAGE, DeleteResponse, HierarchyQuery, PositionService,
};
