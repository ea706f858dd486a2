//! Collaborators the engine depends on.
//!
//! - [`GameStore`]: key-value persistence of games by id
//! - [`IdSource`]: unique identifiers for new games

use crate::game::Game;
use thiserror::Error;

/// Errors a [`GameStore`] can report
#[derive(Debug, Error)]
pub enum StoreError {
    /// No game is stored under this id
    #[error("no game stored under id {id}")]
    NotFound { id: String },

    #[error("failed to encode or decode game: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("storage backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Persistence of games keyed by id.
///
/// `save` overwrites any existing entry with the same id. `get` on an
/// unknown id must return [`StoreError::NotFound`].
pub trait GameStore {
    fn get(&self, id: &str) -> Result<Game, StoreError>;
    fn save(&self, game: &Game) -> Result<(), StoreError>;
}

/// Source of identifiers for new games. Uniqueness is best effort.
pub trait IdSource {
    fn next_id(&self) -> String;
}

impl<T: GameStore + ?Sized> GameStore for &T {
    fn get(&self, id: &str) -> Result<Game, StoreError> {
        (**self).get(id)
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        (**self).save(game)
    }
}

impl<T: IdSource + ?Sized> IdSource for &T {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
