//! The 3x3 board.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so index `row * 3 + col`. A cell
/// only ever goes from [`Cell::Empty`] to a player; [`Board::reset`] is the
/// only public way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns true if the cell at `position` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `position` is not in 0-8.
    pub fn is_occupied(&self, position: usize) -> Result<bool, BoardError> {
        let pos = Position::from_index(position)?;
        Ok(!self.get(pos).is_empty())
    }

    /// Marks an empty cell for `player`.
    ///
    /// The board is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for an index outside 0-8 and
    /// [`BoardError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, player: Player, position: usize) -> Result<(), BoardError> {
        let pos = Position::from_index(position)?;
        if !self.get(pos).is_empty() {
            debug!(%pos, "Cell already occupied");
            return Err(BoardError::CellOccupied(pos));
        }
        self.cells[position] = Cell::Occupied(player);
        Ok(())
    }

    /// Marks an empty cell without validation. Search scratch boards only.
    pub(crate) fn mark(&mut self, pos: Position, player: Player) {
        debug_assert!(self.get(pos).is_empty());
        self.cells[pos.to_index()] = Cell::Occupied(player);
    }

    /// Clears a single cell. Only the search uses this, on its own copy.
    pub(crate) fn undo(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// True iff `player` holds one of the [`WIN_LINES`](crate::WIN_LINES).
    pub fn has_won(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// How the game ended, or `None` while it is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Won(player)),
            None if rules::is_draw(self) => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can pick one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(Player::X, 0).unwrap();
        board.place(Player::O, 4).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_undo_clears_cell() {
        let mut board = Board::new();
        board.place(Player::O, 8).unwrap();
        board.undo(Position::BottomRight);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_outcome() {
        let mut board = Board::new();
        assert_eq!(board.outcome(), None);
        for index in [2, 4, 6] {
            board.place(Player::O, index).unwrap();
        }
        assert_eq!(board.outcome(), Some(Outcome::Won(Player::O)));
    }
}
