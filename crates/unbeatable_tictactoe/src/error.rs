//! Error types for board and search operations.

use crate::position::Position;

/// Error raised by a board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for BoardError {}

/// Error raised by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Every cell is taken.
    #[display("No moves available on a full board")]
    NoMovesAvailable,
}

impl std::error::Error for SearchError {}
