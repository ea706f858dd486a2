//! Game aggregate.
//!
//! A `Game` wraps a [`Board`] with its identity, name, creation settings and
//! lifecycle state.

use crate::board::{Board, BoardError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Still being played
    New,
    /// Every safe cell has been revealed
    Won,
    /// A bomb was revealed
    Lost,
}

/// Board dimensions recorded at creation. Never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub size: usize,
    pub bombs: usize,
}

/// A single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Opaque unique identifier
    pub id: String,
    /// Free-text name chosen by the player
    pub name: String,
    pub state: GameState,
    pub board_settings: BoardSettings,
    pub board: Board,
}

impl Game {
    /// Create a game in the `New` state with a freshly mined board.
    ///
    /// Whether `bombs` makes sense for a player is not checked here; only
    /// whether the board can exist.
    pub fn create<R: Rng>(
        id: impl Into<String>,
        name: impl Into<String>,
        size: usize,
        bombs: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            state: GameState::New,
            board_settings: BoardSettings { size, bombs },
            board: Board::create(size, bombs, rng)?,
        })
    }

    /// Whether the game has reached `Won` or `Lost`
    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    /// Copy of this game with its bombs masked
    pub fn masked(&self) -> Game {
        Game {
            id: self.id.clone(),
            name: self.name.clone(),
            state: self.state,
            board_settings: self.board_settings,
            board: self.board.mask_bombs(),
        }
    }
}
