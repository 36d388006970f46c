//! Longest shortest path (diameter) by the double-sweep technique, and
//! path labelling.

use mazer_core::{CellId, Grid};

use crate::distance_map::DistanceMap;
use crate::error::PathError;

/// Find the longest shortest path in the component of cell 0.
///
/// See [`find_longest_path_from`].
pub fn find_longest_path<T>(grid: &Grid<T>) -> Result<DistanceMap, PathError> {
    find_longest_path_from(grid, 0)
}

/// Double sweep: search from `start`, then again from the farthest cell
/// found. The second map, with its path to its own farthest cell, is
/// returned. Exact when the links form a tree, as generated mazes do.
///
/// A component of a single cell yields a one-cell path.
pub fn find_longest_path_from<T>(grid: &Grid<T>, start: CellId) -> Result<DistanceMap, PathError> {
    let first = DistanceMap::build(grid, start)?;
    let mut second = DistanceMap::build(grid, first.farthest_id())?;
    second.find_path(grid)?;
    log::debug!(
        "longest path: {} -> {} ({} steps)",
        second.source(),
        second.farthest_id(),
        second.farthest_distance()
    );
    Ok(second)
}

impl DistanceMap {
    /// Label the cells of the stored path: `start` on the first, `end` on
    /// the last, and each cell in between with its distance from the source
    /// as a decimal number. A one-cell path gets `end`.
    ///
    /// Returns the number of cells labelled. A path cell the map did not
    /// reach fails with [`PathError::StalePath`] before any label is set.
    pub fn name_path<T>(
        &self,
        grid: &mut Grid<T>,
        start: &str,
        end: &str,
    ) -> Result<usize, PathError> {
        let path = self.path();
        let steps = path
            .iter()
            .map(|&id| self.distance_at(id).ok_or(PathError::StalePath { at: id }))
            .collect::<Result<Vec<_>, _>>()?;
        let last = path.len().saturating_sub(1);
        for (i, (&id, d)) in path.iter().zip(steps).enumerate() {
            if i == last {
                grid.set_cell_label(id, end)?;
            } else if i == 0 {
                grid.set_cell_label(id, start)?;
            } else {
                grid.set_cell_label(id, &d.to_string())?;
            }
        }
        Ok(path.len())
    }
}
