use serde::{Deserialize, Serialize};

use super::grid::{COLS, CONNECT, ROWS};

/// Orientation of a line of connected chips, always read from its starting
/// cell towards increasing columns (or increasing rows for vertical lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalUp,
    DiagonalDown,
}

impl Direction {
    /// Order in which directions are tried from a single starting cell.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
        Direction::Horizontal,
    ];

    /// Column and row offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (1, -1),
        }
    }

    /// The cell `steps` steps away from `(column, row)`, or `None` if it lies
    /// off the board.
    pub fn step(self, column: usize, row: usize, steps: usize) -> Option<(usize, usize)> {
        let (dc, dr) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let column = column.checked_add_signed(dc.checked_mul(steps)?)?;
        let row = row.checked_add_signed(dr.checked_mul(steps)?)?;
        (column < COLS && row < ROWS).then_some((column, row))
    }
}

/// A line of four connected chips: the starting cell plus three steps along
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    column: usize,
    row: usize,
    direction: Direction,
}

impl Placement {
    pub fn new(column: usize, row: usize, direction: Direction) -> Self {
        Placement {
            column,
            row,
            direction,
        }
    }

    pub fn starting_column(&self) -> usize {
        self.column
    }

    pub fn starting_row(&self) -> usize {
        self.row
    }

    /// Starting cell as `(column, row)`
    pub fn starting_cell(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All four cells of the line as `(column, row)`, or `None` if any of them
    /// falls outside the board.
    pub fn cells(&self) -> Option<[(usize, usize); CONNECT]> {
        let mut cells = [(0, 0); CONNECT];
        for (steps, cell) in cells.iter_mut().enumerate() {
            *cell = self.direction.step(self.column, self.row, steps)?;
        }
        Some(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_within_bounds() {
        assert_eq!(Direction::Horizontal.step(0, 0, 3), Some((3, 0)));
        assert_eq!(Direction::Vertical.step(2, 1, 2), Some((2, 3)));
        assert_eq!(Direction::DiagonalUp.step(1, 1, 3), Some((4, 4)));
        assert_eq!(Direction::DiagonalDown.step(0, 3, 3), Some((3, 0)));
    }

    #[test]
    fn test_step_off_board() {
        assert_eq!(Direction::Horizontal.step(4, 0, 3), None);
        assert_eq!(Direction::Vertical.step(0, 3, 3), None);
        assert_eq!(Direction::DiagonalDown.step(0, 2, 3), None);
        assert_eq!(Direction::DiagonalUp.step(6, 5, 0), Some((6, 5)));
        assert_eq!(Direction::DiagonalUp.step(7, 0, 0), None);
    }

    #[test]
    fn test_placement_cells() {
        let placement = Placement::new(0, 3, Direction::DiagonalDown);
        assert_eq!(placement.starting_cell(), (0, 3));
        assert_eq!(
            placement.cells(),
            Some([(0, 3), (1, 2), (2, 1), (3, 0)])
        );
    }

    #[test]
    fn test_placement_cells_off_board() {
        let placement = Placement::new(5, 0, Direction::Horizontal);
        assert_eq!(placement.cells(), None);
    }
}
