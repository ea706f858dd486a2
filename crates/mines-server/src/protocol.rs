//! Line protocol messages for the Minesweeper service.

use mines_core::Game;
use serde::{Deserialize, Serialize};

/// Messages sent from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Fetch a game by id
    GetGame { id: String },

    /// Create a new game
    CreateGame(CreateGameBody),

    /// Reveal a cell of an existing game
    RevealCell {
        id: String,
        #[serde(flatten)]
        cell: RevealCellBody,
    },
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Current game, bombs masked
    Game { game: Game },

    /// Request failed
    Error {
        status: u16,
        #[serde(flatten)]
        body: ErrorBody,
    },
}

impl ServerMessage {
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        ServerMessage::Error {
            status,
            body: ErrorBody {
                message: message.into(),
            },
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameBody {
    pub name: String,
    pub size: usize,
    pub bombs: usize,
}

/// Body of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealCellBody {
    pub row: usize,
    pub col: usize,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_client_messages() {
        let get: ClientMessage =
            serde_json::from_str(r#"{"type":"GetGame","payload":{"id":"abc"}}"#).unwrap();
        assert_eq!(get, ClientMessage::GetGame { id: "abc".into() });

        let create: ClientMessage = serde_json::from_str(
            r#"{"type":"CreateGame","payload":{"name":"mygame","size":4,"bombs":2}}"#,
        )
        .unwrap();
        assert_eq!(
            create,
            ClientMessage::CreateGame(CreateGameBody {
                name: "mygame".into(),
                size: 4,
                bombs: 2,
            })
        );

        let reveal: ClientMessage = serde_json::from_str(
            r#"{"type":"RevealCell","payload":{"id":"abc","row":1,"col":3}}"#,
        )
        .unwrap();
        assert_eq!(
            reveal,
            ClientMessage::RevealCell {
                id: "abc".into(),
                cell: RevealCellBody { row: 1, col: 3 },
            }
        );
    }

    #[test]
    fn test_reject_negative_coordinates() {
        let result = serde_json::from_str::<ClientMessage>(
            r#"{"type":"RevealCell","payload":{"id":"abc","row":-1,"col":3}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_error() {
        let json = serde_json::to_value(ServerMessage::error(404, "game not found")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Error",
                "payload": { "status": 404, "message": "game not found" }
            })
        );
    }
}
