//! Error types for the game boundary and configuration.

use derive_more::Display;
use tracing::instrument;
use unbeatable_tictactoe::{BoardError, SearchError};

/// Error from a session operation. State is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    /// Position out of range or cell already taken.
    #[display("Invalid move: {}", _0)]
    InvalidMove(BoardError),

    /// The game has ended; reset before playing again.
    #[display("Game is already over")]
    GameOver,

    /// The engine had nothing to play.
    #[display("Search failed: {}", _0)]
    Search(SearchError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            GameError::Search(err) => Some(err),
            GameError::GameOver => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::InvalidMove(err)
    }
}

impl From<SearchError> for GameError {
    fn from(err: SearchError) -> Self {
        GameError::Search(err)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
