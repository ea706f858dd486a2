//! Engine errors.

use crate::board::BoardError;
use crate::ports::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad category of an engine failure, for the boundary to map onto its
/// own status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The referenced game does not exist
    NotFound,
    /// Bad bomb count or coordinates
    InvalidInput,
    /// Reveal on a finished game
    IllegalOperation,
    /// Storage or serialization failure
    Internal,
}

/// Errors returned by [`GameEngine`](crate::engine::GameEngine).
///
/// Messages are fixed; the storage failure behind a variant is only kept as
/// its source.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game not found")]
    GameNotFound(#[source] StoreError),

    #[error("get game from repository has failed")]
    LoadFailed(#[source] StoreError),

    #[error("create game into repository has failed")]
    CreateFailed(#[source] StoreError),

    #[error("update game into repository has failed")]
    UpdateFailed(#[source] StoreError),

    #[error("the number of bombs is too high")]
    BombsTooHigh,

    #[error("invalid board settings")]
    InvalidBoard(#[source] BoardError),

    #[error("invalid position")]
    InvalidPosition,

    #[error("game is over")]
    GameOver,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::GameNotFound(_) => ErrorKind::NotFound,
            EngineError::BombsTooHigh
            | EngineError::InvalidBoard(_)
            | EngineError::InvalidPosition => ErrorKind::InvalidInput,
            EngineError::GameOver => ErrorKind::IllegalOperation,
            EngineError::LoadFailed(_)
            | EngineError::CreateFailed(_)
            | EngineError::UpdateFailed(_) => ErrorKind::Internal,
        }
    }
}
