//! Server configuration from the environment.

use thiserror::Error;

const DEFAULT_LOG_FILTER: &str = "info";

/// Largest side length accepted for a new board
pub const DEFAULT_MAX_BOARD_SIZE: usize = 256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MINES_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),

    #[error("MINES_MAX_BOARD_SIZE must be a positive integer, got {0:?}")]
    InvalidMaxBoardSize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Fixed seed for bomb placement
    pub seed: Option<u64>,
    /// Largest side length accepted by `CreateGame`
    pub max_board_size: usize,
}

impl Config {
    /// Read `RUST_LOG`, `MINES_SEED` and `MINES_MAX_BOARD_SIZE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("MINES_SEED").ok(),
            std::env::var("MINES_MAX_BOARD_SIZE").ok(),
        )
    }

    fn from_vars(
        log: Option<String>,
        seed: Option<String>,
        max_board_size: Option<String>,
    ) -> Result<Self, ConfigError> {
        let seed = match seed.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))?,
            ),
        };

        let max_board_size = match max_board_size.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_MAX_BOARD_SIZE,
            Some(raw) => match raw.parse() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidMaxBoardSize(raw.to_string())),
            },
        };

        Ok(Self {
            log_filter: log.unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            seed,
            max_board_size,
        })
    }
}
