//! Maze generation for mazer grids: an unbiased random-walk spanning-tree
//! generator and deterministic fixture layouts.

pub mod fixtures;
pub mod walk;

pub use walk::{CardinalWalker, GenError, MazeGen, RandomWalker, WalkConfig, WalkStats};
