//! Record of completed games.
//!
//! The session only sees the [`HistorySink`] trait. [`GameHistory`] keeps
//! records in memory for the life of the process.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};
use unbeatable_tictactoe::{COMPUTER, HUMAN, Outcome};

/// Winner label stored with each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RecordedWinner {
    /// The human won.
    Player,
    /// The engine won.
    Computer,
    /// Nobody won.
    Draw,
}

impl From<Outcome> for RecordedWinner {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(player) if player == HUMAN => Self::Player,
            Outcome::Won(player) => {
                debug_assert_eq!(player, COMPUTER);
                Self::Computer
            }
            Outcome::Draw => Self::Draw,
        }
    }
}

/// One completed game. Never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameRecord {
    id: u64,
    winner: RecordedWinner,
    /// Clock time from the first human move; `None` if the human never moved.
    duration: Option<Duration>,
}

/// Destination for finished games.
pub trait HistorySink {
    /// Stores a finished game and returns the record written.
    fn record(&mut self, winner: RecordedWinner, duration: Option<Duration>) -> GameRecord;
}

/// In-memory game history with sequential ids starting at 1.
#[derive(Debug, Clone)]
pub struct GameHistory {
    records: Vec<GameRecord>,
    next_id: u64,
}

impl GameHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Win/loss/draw totals over every record.
    #[instrument(skip(self))]
    pub fn stats(&self) -> AggregatedStats {
        let mut stats = AggregatedStats::default();
        for record in &self.records {
            stats.total_games += 1;
            match record.winner {
                RecordedWinner::Player => stats.player_wins += 1,
                RecordedWinner::Computer => stats.computer_wins += 1,
                RecordedWinner::Draw => stats.draws += 1,
            }
        }
        stats
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySink for GameHistory {
    #[instrument(skip(self))]
    fn record(&mut self, winner: RecordedWinner, duration: Option<Duration>) -> GameRecord {
        let record = GameRecord::new(self.next_id, winner, duration);
        self.next_id += 1;
        self.records.push(record.clone());

        info!(
            id = record.id,
            %winner,
            duration = ?duration.map(format_duration),
            "Game recorded"
        );
        record
    }
}

/// Totals across the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct AggregatedStats {
    total_games: u64,
    player_wins: u64,
    computer_wins: u64,
    draws: u64,
}

/// Formats a duration as whole minutes and seconds, e.g. `"2m 5s"`.
///
/// Fractions of a second are dropped, not rounded.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}m {}s", total / 60, total % 60)
}
