//! Tests for the session turn protocol and history logging.

use std::time::Duration;
use unbeatable_server::{
    GameError, GameHistory, GameRecord, GameSession, HistorySink, RecordedWinner,
};
use unbeatable_tictactoe::{BoardError, Cell, Outcome, Player, Position};

/// Plays the first empty cell each turn until the game ends.
fn play_to_end(session: &mut GameSession, history: &mut GameHistory) -> Outcome {
    loop {
        let next = session
            .board()
            .empty_positions()
            .next()
            .expect("Board full without an outcome");
        let turn = session
            .play_turn(next.to_index(), history)
            .expect("Turn failed");
        if let Some(outcome) = turn.outcome {
            return outcome;
        }
    }
}

#[test]
fn test_out_of_range_move_is_invalid_and_changes_nothing() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let result = session.apply_human_move(9, &mut history);

    assert_eq!(result, Err(GameError::InvalidMove(BoardError::OutOfRange(9))));
    assert_eq!(session.board().empty_positions().count(), 9);
    assert!(history.records().is_empty());
}

#[test]
fn test_occupied_cell_is_invalid() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();
    session.play_turn(4, &mut history).expect("Turn failed");
    let before = *session.board();

    let result = session.play_turn(4, &mut history);

    assert_eq!(
        result,
        Err(GameError::InvalidMove(BoardError::CellOccupied(Position::Center)))
    );
    assert_eq!(*session.board(), before);
}

#[test]
fn test_turn_applies_human_move_and_engine_reply() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let turn = session.play_turn(4, &mut history).expect("Turn failed");

    assert_eq!(turn.computer_move, Some(Position::TopLeft));
    assert_eq!(turn.outcome, None);
    assert_eq!(turn.board.get(Position::Center), Cell::Occupied(Player::X));
    assert_eq!(turn.board.get(Position::TopLeft), Cell::Occupied(Player::O));
}

#[test]
fn test_human_row_win_is_recorded_as_player() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    for position in [0, 1] {
        let report = session
            .apply_human_move(position, &mut history)
            .expect("Move failed");
        assert_eq!(report.outcome, None);
    }
    let report = session.apply_human_move(2, &mut history).expect("Move failed");

    assert_eq!(report.outcome, Some(Outcome::Won(Player::X)));
    assert_eq!(history.records().len(), 1);
    assert_eq!(*history.records()[0].winner(), RecordedWinner::Player);
    assert_eq!(*history.records()[0].id(), 1);
}

#[test]
fn test_engine_never_lets_human_win_through_session() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let outcome = play_to_end(&mut session, &mut history);

    assert_ne!(outcome, Outcome::Won(Player::X));
    assert_eq!(history.records().len(), 1);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();
    play_to_end(&mut session, &mut history);
    let empty = session.board().empty_positions().next();

    if let Some(pos) = empty {
        assert_eq!(
            session.play_turn(pos.to_index(), &mut history),
            Err(GameError::GameOver)
        );
    }
    assert_eq!(
        session.apply_computer_move(&mut history),
        Err(GameError::GameOver)
    );
    assert_eq!(history.records().len(), 1);
}

#[test]
fn test_reset_clears_board_and_keeps_history() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();
    play_to_end(&mut session, &mut history);

    let board = session.reset();

    assert!(board.cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(session.outcome(), None);
    assert_eq!(history.records().len(), 1);

    play_to_end(&mut session, &mut history);
    let ids: Vec<u64> = history.records().iter().map(|r| *r.id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_engine_can_move_first() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let report = session.apply_computer_move(&mut history).expect("Engine move failed");

    assert_eq!(report.position, Position::TopLeft);
    assert_eq!(report.outcome, None);
}

/// Sink that only remembers what it was given.
#[derive(Default)]
struct Recorder {
    seen: Vec<(RecordedWinner, Option<Duration>)>,
    history: GameHistory,
}

impl HistorySink for Recorder {
    fn record(&mut self, winner: RecordedWinner, duration: Option<Duration>) -> GameRecord {
        self.seen.push((winner, duration));
        self.history.record(winner, duration)
    }
}

#[test]
fn test_custom_sink_receives_outcome_and_duration() {
    let mut session = GameSession::new();
    let mut recorder = Recorder::default();

    for position in [6, 7, 8] {
        session
            .apply_human_move(position, &mut recorder)
            .expect("Move failed");
    }

    assert_eq!(recorder.seen.len(), 1);
    let (winner, duration) = recorder.seen[0];
    assert_eq!(winner, RecordedWinner::Player);
    assert!(duration.is_some_and(|d| d < Duration::from_secs(60)));
}

/// Long enough to show up in a recorded duration.
const PAUSE: Duration = Duration::from_millis(1100);

/// Wins the top row for X without engine moves and returns the recorded duration.
fn finish_with_top_row(session: &mut GameSession, history: &mut GameHistory) -> Duration {
    for position in [0, 1, 2] {
        session.apply_human_move(position, history).expect("Move failed");
    }
    let record = history.records().last().expect("No record written");
    record.duration().expect("Game should be timed")
}

#[test]
fn test_clock_measures_time_since_first_human_move() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    session.apply_human_move(0, &mut history).expect("Move failed");
    std::thread::sleep(PAUSE);
    session.apply_human_move(1, &mut history).expect("Move failed");
    session.apply_human_move(2, &mut history).expect("Move failed");

    let duration = history.records()[0].duration().expect("Game should be timed");
    assert!(duration >= PAUSE, "duration {:?}", duration);
}

#[test]
fn test_reset_restarts_clock() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    session.apply_human_move(4, &mut history).expect("Move failed");
    std::thread::sleep(PAUSE);
    session.reset();

    let duration = finish_with_top_row(&mut session, &mut history);
    assert!(
        duration < Duration::from_secs(1),
        "clock kept running across reset: {:?}",
        duration
    );
}

#[test]
fn test_rejected_move_does_not_start_clock() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let result = session.apply_human_move(9, &mut history);
    assert!(matches!(result, Err(GameError::InvalidMove(_))));
    std::thread::sleep(PAUSE);

    let duration = finish_with_top_row(&mut session, &mut history);
    assert!(
        duration < Duration::from_secs(1),
        "rejected move started the clock: {:?}",
        duration
    );
}

#[test]
fn test_game_without_human_moves_has_no_duration() {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    let outcome = loop {
        let report = session.apply_computer_move(&mut history).expect("Engine move failed");
        if let Some(outcome) = report.outcome {
            break outcome;
        }
    };

    assert_eq!(outcome, Outcome::Won(Player::O));
    assert_eq!(history.records().len(), 1);
    assert_eq!(*history.records()[0].duration(), None);
}
