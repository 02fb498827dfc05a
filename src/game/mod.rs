//! Core Connect Four rules: chips, the gravity grid, winning lines and the
//! board state machine.

mod board;
mod chip;
mod grid;
mod placement;

pub use board::{Board, GameStatus};
pub use chip::Chip;
pub use grid::{Grid, COLS, CONNECT, ROWS};
pub use placement::{Direction, Placement};
