//! Minesweeper game server.
//!
//! Reads one JSON request per line on stdin and answers on stdout.

use mines_core::GameEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod handler;
mod ids;
mod protocol;
mod server;
mod store;

use config::Config;
use ids::UuidSource;
use store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for replies
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let rng = match config.seed {
        Some(seed) => {
            info!("Using fixed board seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    info!("Starting Minesweeper server...");

    let mut engine = GameEngine::new(MemoryStore::new(), UuidSource, rng);

    server::run_session(
        &mut engine,
        config.max_board_size,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    if !engine.store().is_empty() {
        info!("{} games in store at shutdown", engine.store().len());
    }
    Ok(())
}
