//! Box-drawing text rendering of a [`Grid`], for debugging.
//!
//! Each cell is drawn as a `+---+` box with a three-character interior. The
//! top wall opens when the cell links north, the left wall when the cell to
//! the west links east:
//!
//! ```text
//! +---+---+
//! | A     |
//! +   +---+
//! |     B |
//! +---+---+
//! ```

use std::fmt;

use crate::cell::{Cell, Heading};
use crate::direction::Direction;
use crate::grid::Grid;

/// Width of one cell box interior.
pub const CELL_WIDTH: usize = 3;

/// Render `grid` with `fill` choosing each cell's interior.
///
/// The output is `rows * 2 + 1` lines of `cols * 4 + 1` characters plus a
/// newline each, preceded by `header` on its own line when given.
pub fn render_with<T>(
    grid: &Grid<T>,
    header: Option<&str>,
    mut fill: impl FnMut(&Cell<T>) -> [char; CELL_WIDTH],
) -> String {
    let line_len = grid.cols() * 4 + 2;
    let header_len = header.map_or(0, |h| h.len() + 1);
    let mut out = String::with_capacity(header_len + line_len * (grid.rows() * 2 + 1));

    if let Some(h) = header {
        out.push_str(h);
        out.push('\n');
    }

    for row in 0..grid.rows() {
        // Top border of the row.
        for col in 0..grid.cols() {
            let open = row > 0
                && grid
                    .is_connected_rc((row, col), (row - 1, col), Heading::Toward(Direction::North))
                    .is_some();
            out.push_str(if open { "+   " } else { "+---" });
        }
        out.push_str("+\n");

        // Interior of the row.
        for col in 0..grid.cols() {
            let open = col > 0
                && grid
                    .is_connected_rc((row, col - 1), (row, col), Heading::Toward(Direction::East))
                    .is_some();
            out.push(if open { ' ' } else { '|' });
            if let Some(cell) = grid.cell_at(row, col) {
                out.extend(fill(cell));
            }
        }
        out.push_str("|\n");
    }

    for _ in 0..grid.cols() {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}

/// Left-aligned, space-padded first three characters of `text`.
pub fn clip(text: &str) -> [char; CELL_WIDTH] {
    let mut buf = [' '; CELL_WIDTH];
    for (slot, ch) in buf.iter_mut().zip(text.chars()) {
        *slot = ch;
    }
    buf
}

impl<T> Grid<T> {
    /// Render the grid as text. With `show_labels`, each cell shows the
    /// start of its label and the grid label (if any) heads the output.
    pub fn render_ascii(&self, show_labels: bool) -> String {
        let header = if show_labels { self.label() } else { None };
        render_with(self, header, |cell| match cell.label() {
            Some(text) if show_labels => clip(text),
            _ => [' '; CELL_WIDTH],
        })
    }
}

impl<T> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ascii(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Backlink;

    #[test]
    fn disconnected_grid_is_all_walls() {
        let g: Grid = Grid::new(1, 2, 0).unwrap();
        assert_eq!(g.render_ascii(false), "+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn geometry_matches_dimensions() {
        let g: Grid = Grid::new(3, 5, 0).unwrap();
        let out = g.render_ascii(false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3 * 2 + 1);
        assert!(lines.iter().all(|l| l.len() == 5 * 4 + 1));
    }

    #[test]
    fn openings_follow_links() {
        let mut g: Grid = Grid::new(2, 2, 0).unwrap();
        g.carve(0, Direction::East);
        g.carve(1, Direction::South);
        g.carve(3, Direction::West);
        g.set_cell_label(0, " A").unwrap();
        g.set_cell_label(2, "BEEF").unwrap();
        let expected = "\
+---+---+
| A     |
+---+   +
|BEE    |
+---+---+
";
        assert_eq!(g.render_ascii(true), expected);
    }

    #[test]
    fn openings_are_directed() {
        let mut g: Grid = Grid::new(1, 2, 0).unwrap();
        // West-pointing link from the east cell does not open the wall.
        g.connect(1, Some(Direction::West), 0, Backlink::None);
        assert_eq!(g.render_ascii(false), "+---+---+\n|   |   |\n+---+---+\n");
        g.connect(0, Some(Direction::East), 1, Backlink::None);
        assert_eq!(g.render_ascii(false), "+---+---+\n|       |\n+---+---+\n");
    }

    #[test]
    fn grid_label_heads_labelled_output() {
        let mut g: Grid = Grid::new(1, 1, 0).unwrap();
        g.set_label("tiny").unwrap();
        assert!(g.render_ascii(true).starts_with("tiny\n+---+\n"));
        assert!(g.render_ascii(false).starts_with("+---+\n"));
        assert_eq!(g.to_string(), g.render_ascii(true));
    }
}
