use thiserror::Error;

use crate::block::BlockId;

/// Errors reported by edits on a [`crate::BuilderState`].
///
/// None of these are fatal: the session state is left exactly as it was
/// before the failing action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The action referenced a block that is not in the live list.
    #[error("block not found: {0}")]
    NotFound(BlockId),

    /// A positional move pointed past the end of the list.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A bulk replace carried the same id twice.
    #[error("duplicate block id: {0}")]
    DuplicateId(BlockId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown block kind: {0}")]
pub struct UnknownBlockKind(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown template: {0}")]
pub struct UnknownTemplate(pub String);
