use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::grid::{Grid, COLS, ROWS};
use super::{Chip, Placement};
use crate::error::{MoveError, PlacementError};

/// Progress of a game. `Won` and `Stalemate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won { winner: Chip, placement: Placement },
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A Connect Four game: the grid plus turn order and outcome.
///
/// The board only changes through [`Board::drop_chip`]. Once the game is
/// over every further drop is rejected, while queries stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    last_played: Option<Chip>,
    status: GameStatus,
}

impl Board {
    /// Create an empty board. Either color may move first.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            last_played: None,
            status: GameStatus::InProgress,
        }
    }

    pub fn drop_red(&mut self, column: i32) -> Result<usize, MoveError> {
        self.drop_chip(Chip::Red, column)
    }

    pub fn drop_black(&mut self, column: i32) -> Result<usize, MoveError> {
        self.drop_chip(Chip::Black, column)
    }

    /// Drop `chip` into `column`, returning the row where it landed.
    ///
    /// Checks run in order: game over, out of turn, column range, full
    /// column. The first failing check is reported and nothing changes.
    pub fn drop_chip(&mut self, chip: Chip, column: i32) -> Result<usize, MoveError> {
        if let Err(err) = self.check_move(chip, column) {
            debug!("rejected {chip} in column {column}: {err}");
            return Err(err);
        }

        // check_move guarantees an in-range, non-full column
        let col = column as usize;
        let row = self
            .grid
            .drop_chip(col, chip)
            .ok_or(MoveError::FullColumn(col))?;
        self.last_played = Some(chip);
        debug!("{chip} dropped into column {col}, row {row}");

        self.status = match self.grid.four_connected() {
            Some((winner, placement)) => GameStatus::Won { winner, placement },
            None if self.grid.is_full() => GameStatus::Stalemate,
            None => GameStatus::InProgress,
        };

        match self.status {
            GameStatus::Won { winner, placement } => info!(
                "{winner} wins from ({}, {}) {:?}",
                placement.starting_column(),
                placement.starting_row(),
                placement.direction()
            ),
            GameStatus::Stalemate => info!("board is full, game ends in a stalemate"),
            GameStatus::InProgress => {}
        }

        Ok(row)
    }

    fn check_move(&self, chip: Chip, column: i32) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        if self.last_played == Some(chip) {
            return Err(MoveError::OutOfTurn(chip));
        }

        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn(column))?;

        if self.grid.is_column_full(col) {
            return Err(MoveError::FullColumn(col));
        }

        Ok(())
    }

    /// Check if the top row of every column is occupied
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Scan the whole board for four connected chips. Pure; the result of a
    /// move is already recorded in [`Board::status`].
    pub fn four_connected(&self) -> Option<(Chip, Placement)> {
        self.grid.four_connected()
    }

    /// The winning color, or `None` while in progress or after a stalemate.
    pub fn winner(&self) -> Option<Chip> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// The line that won the game.
    pub fn winning_placement(&self) -> Result<Placement, PlacementError> {
        match self.status {
            GameStatus::InProgress => Err(PlacementError::GameNotOver),
            GameStatus::Stalemate => Err(PlacementError::Stalemate),
            GameStatus::Won { placement, .. } => Ok(placement),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Color of the most recent accepted drop
    pub fn last_played(&self) -> Option<Chip> {
        self.last_played
    }

    /// Get the chip at `(column, row)`, row 0 being the bottom.
    pub fn get(&self, column: usize, row: usize) -> Option<Chip> {
        self.grid.get(column, row)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Columns that can still take a chip. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: String = (0..COLS)
                .map(|col| self.get(col, row).map_or('.', Chip::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..COLS)
            .filter_map(|col| char::from_digit(col as u32, 10))
            .collect();
        write!(f, "{footer}")
    }
}
