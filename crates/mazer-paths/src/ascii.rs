//! Text rendering of a [`DistanceMap`] over its grid.

use mazer_core::Grid;
use mazer_core::ascii::{CELL_WIDTH, clip, render_with};

use crate::distance_map::DistanceMap;

impl DistanceMap {
    /// Draw `grid` with each reached cell showing its distance (last three
    /// digits, right-aligned) and unreached cells left blank. A header
    /// line names the source and the farthest cell.
    pub fn render_ascii<T>(&self, grid: &Grid<T>) -> String {
        let header = format!(
            "distances from {}: farthest {} at {}",
            self.source(),
            self.farthest_id(),
            self.farthest_distance()
        );
        render_with(grid, Some(header.as_str()), |cell| match self.distance_at(cell.id()) {
            Some(d) => {
                let text = format!("{d:>width$}", width = CELL_WIDTH);
                clip(&text[text.len() - CELL_WIDTH..])
            }
            None => [' '; CELL_WIDTH],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Direction;

    #[test]
    fn distances_fill_the_boxes() {
        let mut g: Grid = Grid::new(1, 3, 0).unwrap();
        g.carve(0, Direction::East);
        let dm = DistanceMap::build(&g, 1).unwrap();
        let expected = "\
distances from 1: farthest 0 at 1
+---+---+---+
|  1   0|   |
+---+---+---+
";
        assert_eq!(dm.render_ascii(&g), expected);
    }

    #[test]
    fn long_distances_keep_the_last_digits() {
        let mut g: Grid = Grid::new(1, 1200, 0).unwrap();
        for id in 0..1199 {
            g.carve(id, Direction::East);
        }
        let dm = DistanceMap::build(&g, 0).unwrap();
        let out = dm.render_ascii(&g);
        let interior = out.lines().nth(2).unwrap();
        // Cell 1199 sits in the last box.
        assert!(interior.ends_with("199|"));
    }
}
