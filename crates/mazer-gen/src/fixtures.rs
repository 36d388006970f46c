//! Deterministic connectivity patterns for exercising path searches.
//!
//! Both builders are [`Grid::for_each`] visitors returning the number of
//! passages they carved at the visited cell:
//!
//! ```
//! use mazer_core::Grid;
//! use mazer_gen::fixtures::serpentine;
//!
//! let mut grid: Grid = Grid::new(3, 3, 0).unwrap();
//! assert_eq!(grid.for_each(serpentine), 8);
//! ```

use mazer_core::{CellId, Direction, Grid};

/// One path through every cell: each row is open end to end, and rows
/// join alternately at the west end (below even rows) and the east end
/// (below odd rows).
///
/// ```text
/// +---+---+---+
/// |           |
/// +   +---+---+
/// |           |
/// +---+---+   +
/// |           |
/// +---+---+---+
/// ```
pub fn serpentine<T>(grid: &mut Grid<T>, id: CellId) -> i32 {
    let Some(cell) = grid.cell_by_id(id) else {
        return 0;
    };
    let (row, col) = (cell.row(), cell.col());
    let mut carved = 0;

    if col + 1 < grid.cols() && grid.carve(id, Direction::East).is_some() {
        carved += 1;
    }
    let turn_col = if row % 2 == 0 { 0 } else { grid.cols() - 1 };
    if row + 1 < grid.rows() && col == turn_col && grid.carve(id, Direction::South).is_some() {
        carved += 1;
    }
    carved
}

/// A single loop around the border; interior cells stay isolated.
///
/// ```text
/// +---+---+---+
/// |           |
/// +   +---+   +
/// |   |   |   |
/// +   +---+   +
/// |           |
/// +---+---+---+
/// ```
pub fn hollow<T>(grid: &mut Grid<T>, id: CellId) -> i32 {
    let Some(cell) = grid.cell_by_id(id) else {
        return 0;
    };
    let (row, col) = (cell.row(), cell.col());
    let (last_row, last_col) = (grid.rows() - 1, grid.cols() - 1);
    let mut carved = 0;

    if (row == 0 || row == last_row) && col < last_col && grid.carve(id, Direction::East).is_some() {
        carved += 1;
    }
    if (col == 0 || col == last_col) && row < last_row && grid.carve(id, Direction::South).is_some()
    {
        carved += 1;
    }
    carved
}
