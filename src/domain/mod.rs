//! Core types: PositionId, Position, NewPosition, PositionPatch, PositionNode

mod node;
mod position;
mod position_id;

pub use node::{PositionNode, forest_ids, forest_json};
pub use position::{NewPosition, Position, PositionPatch};
pub use position_id::{ParsePositionIdError, PositionId};
