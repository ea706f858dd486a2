//! Dispatch of client requests to the game engine.

use crate::protocol::{ClientMessage, ServerMessage};
use mines_core::{EngineError, ErrorKind, GameEngine, GameStore, IdSource};
use rand::Rng;
use tracing::{info, warn};

/// Status code reported for each error kind
pub fn status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::InvalidInput => 400,
        ErrorKind::IllegalOperation => 409,
        ErrorKind::Internal => 500,
    }
}

/// Handle a client message.
///
/// `CreateGame` requests for boards wider than `max_board_size` are
/// rejected with a 400 before they reach the engine.
pub fn handle_message<S, I, R>(
    engine: &mut GameEngine<S, I, R>,
    max_board_size: usize,
    msg: ClientMessage,
) -> ServerMessage
where
    S: GameStore,
    I: IdSource,
    R: Rng,
{
    let result = match msg {
        ClientMessage::GetGame { id } => engine.get(&id),

        ClientMessage::CreateGame(body) if body.size > max_board_size => {
            info!(
                "Request rejected (400): board size {} exceeds {}",
                body.size, max_board_size
            );
            return ServerMessage::error(
                400,
                format!("board size must not exceed {}", max_board_size),
            );
        }

        ClientMessage::CreateGame(body) => engine.create(&body.name, body.size, body.bombs),

        ClientMessage::RevealCell { id, cell } => engine.reveal(&id, cell.row, cell.col),
    };

    match result {
        Ok(game) => {
            info!("Game {} is {:?}", game.id, game.state);
            ServerMessage::Game { game }
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(e: &EngineError) -> ServerMessage {
    let status = status_code(e.kind());
    match std::error::Error::source(e) {
        Some(cause) => warn!("Request failed ({}): {}: {}", status, e, cause),
        None => info!("Request rejected ({}): {}", status, e),
    }
    ServerMessage::error(status, e.to_string())
}
