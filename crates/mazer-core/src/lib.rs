//! **mazer-core** — rectangular grids of cells joined by directed,
//! per-direction links.
//!
//! This crate provides the storage every maze algorithm works on: direction
//! codes, the [`Cell`]/[`Grid`] arena, connection filters for neighbour
//! queries, border and wall masks, bounded labels, and a box-drawing ASCII
//! renderer for debugging.

pub mod ascii;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod label;
pub mod sides;

pub use cell::{Cell, CellId, Heading};
pub use direction::{DIRECTIONS, Direction, opposite_code};
pub use grid::{Backlink, Connection, Grid, GridError};
pub use label::{LabelError, MAX_LABEL_LEN, Relabel};
pub use sides::Sides;
