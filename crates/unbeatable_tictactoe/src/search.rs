//! Exhaustive minimax search for the computer's move.
//!
//! The computer ([`COMPUTER`]) maximises and the human ([`HUMAN`])
//! minimises. Every line of play is followed to the end of the game; the
//! tree is small enough (at most 9! move orders) that no pruning or caching
//! is needed.
//!
//! Scores are from the computer's point of view:
//!
//! | Score | Meaning |
//! |-------|---------|
//! | `1`   | computer wins |
//! | `0`   | draw |
//! | `-1`  | human wins |

use crate::board::Board;
use crate::error::SearchError;
use crate::position::Position;
use crate::types::{COMPUTER, HUMAN};
use tracing::{debug, instrument};

/// Minimax value of a position, always in `-1..=1`.
pub type Score = i8;

/// Scores `board` assuming both sides play perfectly from here.
///
/// `maximizing` is true when the computer is next to move. Terminal boards
/// are scored directly. Otherwise every empty cell is tried in turn, the
/// subtree evaluated, and the move undone, so `board` is unchanged on
/// return.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    Search::default().evaluate(board, maximizing)
}

/// Picks the optimal move for the computer.
///
/// Ties between equally good moves go to the lowest index. The caller's
/// board is not modified; apply the returned move yourself.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
pub fn best_move(board: &Board) -> Result<Position, SearchError> {
    best_move_scored(board).map(|(pos, _)| pos)
}

/// Like [`best_move`], also returning the minimax score of the chosen move.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn best_move_scored(board: &Board) -> Result<(Position, Score), SearchError> {
    let mut scratch = *board;
    let mut search = Search::default();
    let mut best: Option<(Position, Score)> = None;

    for pos in board.empty_positions() {
        scratch.mark(pos, COMPUTER);
        let score = search.evaluate(&mut scratch, false);
        scratch.undo(pos);

        // Strict comparison keeps the first of several equal moves.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or(SearchError::NoMovesAvailable)?;
    debug!(%pos, score, nodes = search.nodes, "Search complete");
    Ok((pos, score))
}

/// Recursion state for one search call.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if board.has_won(COMPUTER) {
            return 1;
        }
        if board.has_won(HUMAN) {
            return -1;
        }
        if board.is_full() {
            return 0;
        }

        let (player, mut best) = if maximizing {
            (COMPUTER, Score::MIN)
        } else {
            (HUMAN, Score::MAX)
        };

        for pos in Position::ALL {
            if !board.get(pos).is_empty() {
                continue;
            }
            board.mark(pos, player);
            let score = self.evaluate(board, !maximizing);
            board.undo(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (index, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match ch {
                'X' => board.place(Player::X, index).unwrap(),
                'O' => board.place(Player::O, index).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(evaluate(&mut board_from("OOO XX. ..."), true), 1);
        assert_eq!(evaluate(&mut board_from("XXX OO. ..."), false), -1);
        assert_eq!(evaluate(&mut board_from("XOX OXX OXO"), true), 0);
    }

    #[test]
    fn test_evaluate_restores_board() {
        let mut board = board_from("X.. .O. ...");
        let before = board;
        evaluate(&mut board, false);
        assert_eq!(board, before);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O . / X X . / X . .
        let board = board_from("OO. XX. X..");
        assert_eq!(best_move_scored(&board), Ok((Position::TopRight, 1)));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X . / . O . / . . .
        let board = board_from("XX. .O. ...");
        assert_eq!(best_move(&board), Ok(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = board_from("XOX OXX OXO");
        assert_eq!(best_move(&board), Err(SearchError::NoMovesAvailable));
    }
}
