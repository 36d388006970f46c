//! Error type for distance-map queries.

use std::fmt;

use mazer_core::{CellId, LabelError};

/// Errors arising from building or querying a [`DistanceMap`](crate::DistanceMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The id names no cell of the grid.
    NoSuchCell(CellId),
    /// The target was not reached from the source.
    Unreachable { target: CellId },
    /// A reached cell has no linked neighbour one step closer to the source.
    /// The map does not describe the grid it was used with.
    Inconsistent { at: CellId, distance: u32 },
    /// The map was built over a grid of a different shape.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// The stored path visits a cell the map never reached.
    StalePath { at: CellId },
    /// Labelling a path cell failed.
    Label(LabelError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchCell(id) => write!(f, "no cell with id {id}"),
            Self::Unreachable { target } => write!(f, "cell {target} is unreachable"),
            Self::Inconsistent { at, distance } => write!(
                f,
                "inconsistent distance map: cell {at} at distance {distance} has no predecessor"
            ),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "distance map is for a {}x{} grid, used with {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::StalePath { at } => {
                write!(f, "stored path visits cell {at}, which the map did not reach")
            }
            Self::Label(e) => write!(f, "path label: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Label(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LabelError> for PathError {
    fn from(e: LabelError) -> Self {
        Self::Label(e)
    }
}
