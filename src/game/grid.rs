use super::placement::{Direction, Placement};
use super::Chip;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of chips in a winning line.
pub const CONNECT: usize = 4;

/// Cell storage, column-major. Row 0 is the bottom of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    columns: [[Option<Chip>; ROWS]; COLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            columns: [[None; ROWS]; COLS],
        }
    }

    /// Get the chip at `(column, row)`; off-board cells read as empty.
    pub fn get(&self, column: usize, row: usize) -> Option<Chip> {
        self.columns
            .get(column)
            .and_then(|cells| cells.get(row))
            .copied()
            .flatten()
    }

    /// Number of chips stacked in a column
    pub fn height(&self, column: usize) -> usize {
        self.columns
            .get(column)
            .map_or(0, |cells| cells.iter().take_while(|cell| cell.is_some()).count())
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.columns.get(column) {
            Some(cells) => cells[ROWS - 1].is_some(),
            None => true,
        }
    }

    /// Drop a chip into a column, returns the row where it landed, or `None`
    /// if the column is full or off the board.
    pub fn drop_chip(&mut self, column: usize, chip: Chip) -> Option<usize> {
        let cells = self.columns.get_mut(column)?;
        let row = cells.iter().position(Option::is_none)?;
        cells[row] = Some(chip);
        Some(row)
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// Find the first line of four connected chips.
    ///
    /// Cells are scanned column by column from the left, bottom to top within
    /// a column, and each occupied cell is tried as the start of a line in
    /// [`Direction::SCAN_ORDER`]. The first hit decides the reported
    /// placement when the grid holds more than one line.
    pub fn four_connected(&self) -> Option<(Chip, Placement)> {
        for (column, cells) in self.columns.iter().enumerate() {
            for (row, cell) in cells.iter().enumerate() {
                let Some(chip) = *cell else {
                    continue;
                };

                for direction in Direction::SCAN_ORDER {
                    if self.line_matches(chip, column, row, direction) {
                        return Some((chip, Placement::new(column, row, direction)));
                    }
                }
            }
        }

        None
    }

    /// Check the three cells following `(column, row)` along `direction`.
    fn line_matches(&self, chip: Chip, column: usize, row: usize, direction: Direction) -> bool {
        (1..CONNECT).all(|steps| {
            direction
                .step(column, row, steps)
                .and_then(|(c, r)| self.get(c, r))
                == Some(chip)
        })
    }
}
