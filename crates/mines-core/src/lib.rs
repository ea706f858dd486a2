//! Minesweeper game engine.
//!
//! This crate provides the core logic of a single-player Minesweeper
//! service:
//! - Board generation with random bomb placement
//! - The game aggregate and its lifecycle
//! - A use-case layer enforcing the rules against injected storage
//!
//! # Architecture
//!
//! The engine does no I/O of its own. Persistence and id generation are
//! reached through the traits in [`ports`], so a host can plug in any store
//! and tests can substitute fakes.
//!
//! # Modules
//!
//! - [`board`]: Cells, bomb placement and masking
//! - [`game`]: Game aggregate
//! - [`engine`]: Create / get / reveal operations
//! - [`ports`]: Storage and id traits
//! - [`error`]: Engine errors

pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod ports;

// Re-export commonly used types
pub use board::{Board, BoardError, Cell};
pub use engine::GameEngine;
pub use error::{EngineError, ErrorKind};
pub use game::{BoardSettings, Game, GameState};
pub use ports::{GameStore, IdSource, StoreError};
