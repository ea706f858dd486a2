//! Request loop over a line-delimited JSON stream.

use crate::handler::handle_message;
use crate::protocol::{ClientMessage, ServerMessage};
use mines_core::{GameEngine, GameStore, IdSource};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Serve requests until the input stream ends.
///
/// Each input line is one [`ClientMessage`]; each answer is one
/// [`ServerMessage`] line. Blank lines are skipped.
pub async fn run_session<S, I, R, In, Out>(
    engine: &mut GameEngine<S, I, R>,
    max_board_size: usize,
    input: In,
    mut output: Out,
) -> anyhow::Result<()>
where
    S: GameStore,
    I: IdSource,
    R: Rng,
    In: AsyncBufRead + Unpin,
    Out: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<ClientMessage>(line) {
            Ok(msg) => {
                debug!("Request: {:?}", msg);
                handle_message(engine, max_board_size, msg)
            }
            Err(e) => {
                warn!("Invalid message: {}: {}", line, e);
                ServerMessage::error(400, format!("invalid request: {}", e))
            }
        };

        let mut text = serde_json::to_string(&reply)?;
        text.push('\n');
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        handled += 1;
    }

    info!("Input closed after {} requests", handled);
    Ok(())
}
