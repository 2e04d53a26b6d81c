//! HTTP API for the browser front end.
//!
//! Endpoints:
//! - GET  /              - Game page
//! - POST /make_move     - Human move plus engine reply
//! - POST /reset_game    - Clear the board
//! - GET  /game_history  - Finished games
//! - GET  /game_stats    - Win/loss/draw totals
//! - GET  /health        - Health check

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use types::{
    BoardResponse, HealthResponse, HistoryEntry, MoveRequest, MoveResponse, board_to_wire,
};

use crate::history::GameHistory;
use crate::session::GameSession;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single live game and the history it writes to.
#[derive(Debug, Default)]
pub struct Table {
    /// Current session.
    pub session: GameSession,
    /// Finished games.
    pub history: GameHistory,
}

/// Shared application state.
///
/// One lock covers the whole table so a human move and the engine's reply
/// are applied as a unit.
#[derive(Debug, Default)]
pub struct AppState {
    /// The game table.
    pub table: Mutex<Table>,
}

/// Creates the application router with the given state.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/make_move", post(handlers::make_move))
        .route("/reset_game", post(handlers::reset_game))
        .route("/game_history", get(handlers::game_history))
        .route("/game_stats", get(handlers::game_stats))
        .route("/health", get(handlers::health))
        .with_state(state)
}
