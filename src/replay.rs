//! Feed a sequence of columns into a fresh board, alternating colors.

use log::warn;
use serde::Serialize;

use crate::error::MoveError;
use crate::game::{Board, Chip, GameStatus};

/// Result of replaying a move sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    #[serde(skip)]
    pub board: Board,
    pub moves_played: usize,
    pub rejected: usize,
    pub status: GameStatus,
    /// Rows top to bottom, as rendered by the board
    pub rows: Vec<String>,
}

/// Replay `columns` starting with `first`. Colors alternate after every
/// accepted move; a rejected move keeps the same color to play.
///
/// With `stop_on_error` the first rejected move is returned as an error,
/// otherwise it is logged, counted and skipped.
pub fn replay(first: Chip, columns: &[i32], stop_on_error: bool) -> Result<ReplaySummary, MoveError> {
    let mut board = Board::new();
    let mut chip = first;
    let mut moves_played = 0;
    let mut rejected = 0;

    for (index, &column) in columns.iter().enumerate() {
        match board.drop_chip(chip, column) {
            Ok(_) => {
                moves_played += 1;
                chip = chip.other();
            }
            Err(err) if stop_on_error => return Err(err),
            Err(err) => {
                warn!("skipping move {} ({chip} in column {column}): {err}", index + 1);
                rejected += 1;
            }
        }
    }

    let rows = board
        .to_string()
        .lines()
        .map(str::to_string)
        .collect();

    Ok(ReplaySummary {
        status: board.status(),
        board,
        moves_played,
        rejected,
        rows,
    })
}
