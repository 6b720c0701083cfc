//! Error type for position operations.

use thiserror::Error;

use crate::domain::PositionId;
use crate::hierarchy::PageError;
use crate::store::StoreError;

/// Errors returned by [`PositionService`](super::PositionService).
///
/// The three variants are the three outcomes a caller has to tell apart:
/// bad input, a missing position, and a failure inside the store.
#[derive(Debug, Error)]
pub enum PositionError {
    /// Missing or empty required input, a bad parent link, or a bad page.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced position does not exist.
    #[error("position not found: {id}")]
    NotFound { id: PositionId },

    /// The store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for position operations.
pub type PositionResult<T> = Result<T, PositionError>;

impl PositionError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the HTTP status an API layer would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Storage(_) => 500,
        }
    }

    /// Returns true for [`PositionError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<PageError> for PositionError {
    fn from(err: PageError) -> Self {
        Self::Validation(err.to_string())
    }
}
