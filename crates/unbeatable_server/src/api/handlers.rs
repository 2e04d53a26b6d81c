//! Route handlers.

use super::AppState;
use super::error::ApiError;
use super::types::{
    BoardResponse, HealthResponse, HistoryEntry, MoveRequest, MoveResponse, board_to_wire,
};
use crate::history::AggregatedStats;
use axum::Json;
use axum::extract::{FromRequest, State};
use axum::response::Html;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// JSON extractor whose rejections become [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Serves the game page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Applies the human move and, if the game is still open, the engine's reply.
#[instrument(skip_all, fields(position = req.position))]
pub async fn make_move(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let mut table = state.table.lock().await;
    let super::Table { session, history } = &mut *table;

    let turn = session.play_turn(req.position, history)?;
    debug!(computer_move = ?turn.computer_move, outcome = ?turn.outcome, "Turn applied");

    Ok(Json(MoveResponse {
        board: board_to_wire(&turn.board),
        winner: turn.outcome.map(|outcome| outcome.label().to_string()),
        computer_move: turn.computer_move.map(|pos| pos.to_index()),
    }))
}

/// Clears the board and the game clock. History is kept.
#[instrument(skip_all)]
pub async fn reset_game(State(state): State<Arc<AppState>>) -> Json<BoardResponse> {
    let mut table = state.table.lock().await;
    let board = table.session.reset();
    info!("Game reset via API");

    Json(BoardResponse {
        board: board_to_wire(board),
    })
}

/// Lists finished games, oldest first.
#[instrument(skip_all)]
pub async fn game_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntry>> {
    let table = state.table.lock().await;
    let entries: Vec<HistoryEntry> = table
        .history
        .records()
        .iter()
        .map(HistoryEntry::from)
        .collect();
    debug!(count = entries.len(), "History served");
    Json(entries)
}

/// Win/loss/draw totals.
#[instrument(skip_all)]
pub async fn game_stats(State(state): State<Arc<AppState>>) -> Json<AggregatedStats> {
    let table = state.table.lock().await;
    Json(table.history.stats())
}

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
