//! Distance maps and paths over mazer grids.
//!
//! - **BFS** single-source distance maps ([`DistanceMap::build`])
//! - **Path reconstruction** back from any reached cell
//!   ([`DistanceMap::find_path`], [`DistanceMap::find_path_to`])
//! - **Longest path** by double sweep ([`find_longest_path`])
//! - **Path naming** for readable renders ([`DistanceMap::name_path`])
//!
//! Only links present in both directions are walked.

mod ascii;
mod distance_map;
mod error;
mod longest;

pub use distance_map::{DistanceMap, UNREACHED};
pub use error::PathError;
pub use longest::{find_longest_path, find_longest_path_from};
