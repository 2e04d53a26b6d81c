//! Request and response bodies.

use crate::history::{GameRecord, format_duration};
use serde::{Deserialize, Serialize};
use unbeatable_tictactoe::Board;

/// Body of `POST /make_move`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Board index 0-8.
    pub position: usize,
}

/// Result of a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Cells as `" "`, `"X"` or `"O"`.
    pub board: Vec<String>,
    /// `"X"`, `"O"`, `"Draw"`, or null while the game goes on.
    pub winner: Option<String>,
    /// Index the engine played, if it moved.
    pub computer_move: Option<usize>,
}

/// Board-only response from `POST /reset_game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Cells as `" "`, `"X"` or `"O"`.
    pub board: Vec<String>,
}

/// One row of `GET /game_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sequential game id.
    pub id: u64,
    /// `"Player"`, `"Computer"` or `"Draw"`.
    pub winner: String,
    /// Whole minutes and seconds, e.g. `"2m 5s"`; null if the human never moved.
    pub duration: Option<String>,
}

impl From<&GameRecord> for HistoryEntry {
    fn from(record: &GameRecord) -> Self {
        Self {
            id: *record.id(),
            winner: record.winner().to_string(),
            duration: record.duration().map(format_duration),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Converts a board into the list of cell strings the page expects.
pub fn board_to_wire(board: &Board) -> Vec<String> {
    board.cells().iter().map(ToString::to_string).collect()
}
