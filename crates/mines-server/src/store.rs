//! In-memory game storage.

use dashmap::DashMap;
use mines_core::{Game, GameStore, StoreError};
use tracing::trace;

/// Game store keeping each game as an encoded JSON record.
///
/// Encoding on every save means callers never share state with the
/// stored copy.
pub struct MemoryStore {
    games: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Number of stored games
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Game, StoreError> {
        let record = self.games.get(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        Ok(serde_json::from_slice(record.value())?)
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        let record = serde_json::to_vec(game)?;
        trace!("Storing game {} ({} bytes)", game.id, record.len());
        self.games.insert(game.id.clone(), record);
        Ok(())
    }
}
