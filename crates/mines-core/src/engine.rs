//! Game use cases: create, fetch and reveal.
//!
//! Every operation reads from the [`GameStore`], applies the game rules and
//! writes the result back. Values handed back to the caller always have
//! their bombs masked; the stored copy never does.
//!
//! State transitions on reveal:
//! - bomb cell: `New` -> `Lost`
//! - safe cell, no `Empty` cell left: `New` -> `Won`
//! - safe cell otherwise: stays `New`
//!
//! `Won` and `Lost` are terminal.

use crate::board::Cell;
use crate::error::EngineError;
use crate::game::{Game, GameState};
use crate::ports::{GameStore, IdSource, StoreError};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

/// Runs game operations against a store and an id source
pub struct GameEngine<S, I, R = StdRng> {
    store: S,
    ids: I,
    rng: R,
}

impl<S: GameStore, I: IdSource, R: Rng> GameEngine<S, I, R> {
    /// Create an engine. `rng` drives bomb placement for new games.
    pub fn new(store: S, ids: I, rng: R) -> Self {
        Self { store, ids, rng }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a game by id, bombs masked
    pub fn get(&self, id: &str) -> Result<Game, EngineError> {
        let game = self.load(id)?;
        Ok(game.masked())
    }

    /// Create and store a new game, returned with bombs masked.
    ///
    /// Fails with [`EngineError::BombsTooHigh`] when `bombs >= size * size`,
    /// before anything is stored.
    pub fn create(&mut self, name: &str, size: usize, bombs: usize) -> Result<Game, EngineError> {
        match size.checked_mul(size) {
            Some(cells) if bombs < cells => {}
            _ => return Err(EngineError::BombsTooHigh),
        }

        let id = self.ids.next_id();
        let game = Game::create(id, name, size, bombs, &mut self.rng)
            .map_err(EngineError::InvalidBoard)?;

        self.store.save(&game).map_err(|e| {
            warn!("Failed to store new game {}: {}", game.id, e);
            EngineError::CreateFailed(e)
        })?;

        info!("Created game {} ({}x{}, {} bombs)", game.id, size, size, bombs);
        Ok(game.masked())
    }

    /// Reveal the cell at `(row, col)`, returning the updated game with bombs
    /// masked.
    ///
    /// Nothing is stored if the position is off the board or the game is
    /// already over.
    pub fn reveal(&mut self, id: &str, row: usize, col: usize) -> Result<Game, EngineError> {
        let mut game = self.load(id)?;

        if !game.board.is_valid_position(row, col) {
            return Err(EngineError::InvalidPosition);
        }
        if game.is_over() {
            return Err(EngineError::GameOver);
        }

        debug!("Revealing ({}, {}) in game {}", row, col, game.id);
        if game.board.cell_is(row, col, Cell::Bomb) {
            game.state = GameState::Lost;
        } else {
            game.board.set_cell(row, col, Cell::Revealed);
            if !game.board.has_empty_cell() {
                game.state = GameState::Won;
            }
        }

        self.store.save(&game).map_err(|e| {
            warn!("Failed to store game {}: {}", game.id, e);
            EngineError::UpdateFailed(e)
        })?;

        if game.is_over() {
            info!("Game {} finished: {:?}", game.id, game.state);
        }
        Ok(game.masked())
    }

    fn load(&self, id: &str) -> Result<Game, EngineError> {
        self.store.get(id).map_err(|e| match e {
            StoreError::NotFound { .. } => EngineError::GameNotFound(e),
            e => {
                warn!("Failed to load game {}: {}", id, e);
                EngineError::LoadFailed(e)
            }
        })
    }
}
