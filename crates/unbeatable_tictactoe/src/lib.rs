//! Tic-tac-toe rules and a perfect-play opponent.
//!
//! The crate has two halves:
//!
//! - **Board**: the 3x3 grid, occupancy, win and fullness checks
//! - **Search**: exhaustive minimax that picks the computer's move
//!
//! The human always plays [`Player::X`] and the computer [`Player::O`].
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Player, best_move};
//!
//! let mut board = Board::new();
//! board.place(Player::X, 4).unwrap();
//!
//! let reply = best_move(&board).unwrap();
//! board.place(Player::O, reply.to_index()).unwrap();
//! assert!(board.outcome().is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::Board;
pub use error::{BoardError, SearchError};
pub use position::Position;
pub use rules::WIN_LINES;
pub use search::{Score, best_move, best_move_scored, evaluate};
pub use types::{COMPUTER, Cell, HUMAN, Outcome, Player};
