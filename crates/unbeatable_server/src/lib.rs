//! Unbeatable server library - the boundary around the minimax engine.
//!
//! # Architecture
//!
//! - **Session**: one board, the turn protocol, and the game clock
//! - **History**: finished games, written through the `HistorySink` trait
//! - **API**: axum routes for the browser front end
//! - **Play**: terminal front end over the same session
//!
//! # Example
//!
//! ```
//! use unbeatable_server::{GameHistory, GameSession};
//!
//! let mut session = GameSession::new();
//! let mut history = GameHistory::new();
//! let turn = session.play_turn(4, &mut history).unwrap();
//! assert!(turn.computer_move.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;
mod history;
mod play;
mod server;
mod session;

// Crate-level exports - HTTP API
pub use api::{
    ApiError, AppState, BoardResponse, HealthResponse, HistoryEntry, MoveRequest, MoveResponse,
    Table, board_to_wire, create_app,
};

// Crate-level exports - Configuration
pub use config::ServerConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, GameError};

// Crate-level exports - History
pub use history::{
    AggregatedStats, GameHistory, GameRecord, HistorySink, RecordedWinner, format_duration,
};

// Crate-level exports - Session management
pub use session::{GameSession, MoveReport, TurnReport};

// Crate-level exports - Front ends
pub use play::play;
pub use server::serve;
