//! One live game: the board, the turn protocol, and the game clock.

use crate::error::GameError;
use crate::history::{GameRecord, HistorySink, RecordedWinner};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use unbeatable_tictactoe::{Board, COMPUTER, HUMAN, Outcome, Position, best_move};

/// Result of a single move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the mark went.
    pub position: Position,
    /// Board after the move.
    pub board: Board,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

/// Result of a human move plus the engine's reply, if the game went on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Board after both moves.
    pub board: Board,
    /// Where the engine played, if it had a turn.
    pub computer_move: Option<Position>,
    /// Set when the game is over.
    pub outcome: Option<Outcome>,
}

/// A game session.
///
/// Owns exactly one board. The clock starts on the first accepted human
/// move and stops when a move ends the game, at which point the result is
/// written to the [`HistorySink`] passed in.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    started_at: Option<Instant>,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self::default()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How the game ended, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended, or
    /// [`GameError::InvalidMove`] for an out-of-range or occupied position.
    /// Nothing changes on error.
    #[instrument(skip(self, history))]
    pub fn apply_human_move(
        &mut self,
        position: usize,
        history: &mut impl HistorySink,
    ) -> Result<MoveReport, GameError> {
        self.ensure_in_progress()?;

        self.board.place(HUMAN, position).map_err(|err| {
            warn!(position, error = %err, "Rejected human move");
            GameError::from(err)
        })?;

        if self.started_at.is_none() {
            info!("Game clock started");
            self.started_at = Some(Instant::now());
        }

        let pos = Position::from_index(position)?;
        Ok(self.finish_move(pos, history))
    }

    /// Lets the engine choose and place the computer's mark.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended.
    #[instrument(skip(self, history))]
    pub fn apply_computer_move(
        &mut self,
        history: &mut impl HistorySink,
    ) -> Result<MoveReport, GameError> {
        self.ensure_in_progress()?;

        let pos = best_move(&self.board)?;
        self.board.place(COMPUTER, pos.to_index())?;
        debug!(%pos, "Computer moved");

        Ok(self.finish_move(pos, history))
    }

    /// Human move followed by the engine's reply when the game is still open.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply_human_move`].
    #[instrument(skip(self, history))]
    pub fn play_turn(
        &mut self,
        position: usize,
        history: &mut impl HistorySink,
    ) -> Result<TurnReport, GameError> {
        let human = self.apply_human_move(position, history)?;
        if human.outcome.is_some() {
            return Ok(TurnReport {
                board: human.board,
                computer_move: None,
                outcome: human.outcome,
            });
        }

        let computer = self.apply_computer_move(history)?;
        Ok(TurnReport {
            board: computer.board,
            computer_move: Some(computer.position),
            outcome: computer.outcome,
        })
    }

    /// Clears the board and the game clock.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &Board {
        self.board.reset();
        self.started_at = None;
        info!("Session reset");
        &self.board
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.outcome().is_some() {
            warn!("Move attempted after game ended");
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Builds the report and logs the game if this move ended it.
    fn finish_move(&mut self, position: Position, history: &mut impl HistorySink) -> MoveReport {
        let outcome = self.board.outcome();
        if let Some(outcome) = outcome {
            let record = self.record_outcome(outcome, history);
            info!(%outcome, id = record.id(), "Game finished");
        }

        MoveReport {
            position,
            board: self.board,
            outcome,
        }
    }

    fn record_outcome(&self, outcome: Outcome, history: &mut impl HistorySink) -> GameRecord {
        let duration = self.started_at.map(|start| start.elapsed());
        history.record(RecordedWinner::from(outcome), duration)
    }
}
