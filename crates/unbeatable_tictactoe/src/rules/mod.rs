//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's own
//! `has_won`/`is_full` methods delegate here.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, has_won, winner};
