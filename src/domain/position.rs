//! Persisted position records and the inputs that create or change them.

use serde::{Deserialize, Deserializer, Serialize};

use super::PositionId;

/// A position row exactly as the store holds it.
///
/// This type never carries children; tree views are [`PositionNode`](super::PositionNode)s
/// produced by the hierarchy builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    pub description: String,
    pub parentid: Option<PositionId>,
}

impl Position {
    /// Creates a position record.
    pub fn new(
        id: PositionId,
        name: impl Into<String>,
        description: impl Into<String>,
        parentid: Option<PositionId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            parentid,
        }
    }

    /// Returns true if the position has no parent.
    pub fn is_root(&self) -> bool {
        self.parentid.is_none()
    }
}

/// Input for creating a position. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosition {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parentid: Option<PositionId>,
}

impl NewPosition {
    /// Creates a root-level position input.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parentid: None,
        }
    }

    /// Sets the parent.
    pub fn parent(mut self, parentid: Option<PositionId>) -> Self {
        self.parentid = parentid;
        self
    }
}

/// A partial update.
///
/// `parentid` distinguishes "leave unchanged" (`None`) from "make root"
/// (`Some(None)`). In JSON an absent key means unchanged and `null` means root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub parentid: Option<Option<PositionId>>,
}

impl PositionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the position under `parentid`, or to the root level when `None`.
    pub fn parent(mut self, parentid: Option<PositionId>) -> Self {
        self.parentid = Some(parentid);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.parentid.is_none()
    }

    /// Applies the patch to a copy of `position`.
    pub fn apply_to(&self, position: &Position) -> Position {
        let mut updated = position.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(parentid) = self.parentid {
            updated.parentid = parentid;
        }
        updated
    }
}

// A present key always yields `Some`, so an explicit `null` becomes `Some(None)`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<PositionId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<PositionId>::deserialize(deserializer).map(Some)
}
