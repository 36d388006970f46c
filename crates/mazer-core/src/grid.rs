//! The [`Grid`] type: a fixed-size, row-major arena of [`Cell`]s addressed
//! by [`CellId`].
//!
//! Links between cells are stored as ids, so the whole grid is a plain
//! vector with bounds-checked lookups. Lookups that miss (bad id, bad
//! coordinates, off-grid neighbour) return `None` rather than failing.

use std::fmt;

use rand::{Rng, RngExt};

use crate::cell::{Cell, CellId, Heading};
use crate::direction::Direction;
use crate::label::{self, LabelError, Relabel};
use crate::sides::Sides;

/// How a neighbour query treats the link between the two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Connection {
    /// The geometric neighbour, linked or not.
    Any,
    /// The neighbour, only if this cell has no link in that direction.
    NotConnected,
    /// The neighbour, only if this cell links to it in that direction.
    LinkedThisWay,
    /// The neighbour, only if the link exists both ways.
    Symmetric,
}

/// The reverse half of a [`Grid::connect`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backlink {
    /// One-way link; the second cell is left untouched.
    None,
    /// Link back through the opposite of the forward direction.
    Opposite,
    /// Link back through this direction.
    Toward(Direction),
}

/// Errors from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows and columns must both be at least 1.
    EmptyDimension { rows: usize, cols: usize },
    /// Cell storage could not be reserved.
    Alloc,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { rows, cols } => {
                write!(f, "grid: dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::Alloc => f.write_str("grid: cell allocation failed"),
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows` x `cols` grid of cells.
///
/// Cells are created disconnected and are never added or removed; only
/// their links, labels, kinds and payloads change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T = ()> {
    rows: usize,
    cols: usize,
    planes: usize,
    kind: i32,
    label: Option<String>,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// Create a disconnected grid. Every cell starts with `kind`.
    pub fn new(rows: usize, cols: usize, kind: i32) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::EmptyDimension { rows, cols });
        }
        let len = rows.checked_mul(cols).ok_or(GridError::Alloc)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| GridError::Alloc)?;
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row * cols + col, row, col, kind));
            }
        }
        log::trace!("created {rows}x{cols} grid");
        Ok(Self {
            rows,
            cols,
            planes: 1,
            kind,
            label: None,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Always 1: the up/down plane is reserved.
    #[inline]
    pub fn planes(&self) -> usize {
        self.planes
    }

    #[inline]
    pub fn kind(&self) -> i32 {
        self.kind
    }

    /// Number of cells, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the grid label, same rules as [`Cell::set_label`].
    pub fn set_label(&mut self, text: &str) -> Result<Relabel, LabelError> {
        label::replace(&mut self.label, text)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Id of the cell at `(row, col)`, if inside the grid.
    #[inline]
    pub fn id_at(&self, row: usize, col: usize) -> Option<CellId> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell<T>> {
        self.id_at(row, col).map(|id| &self.cells[id])
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell<T>> {
        let id = self.id_at(row, col)?;
        Some(&mut self.cells[id])
    }

    #[inline]
    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell<T>> {
        self.cells.get(id)
    }

    #[inline]
    pub fn cell_by_id_mut(&mut self, id: CellId) -> Option<&mut Cell<T>> {
        self.cells.get_mut(id)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell<T>> {
        self.cells.iter()
    }

    /// Id of the geometric neighbour of `id` in direction `d`, subject to
    /// `filter`. Off-grid neighbours and up/down are always `None`.
    pub fn neighbor_id(&self, id: CellId, d: Direction, filter: Connection) -> Option<CellId> {
        let cell = self.cell_by_id(id)?;
        let (drow, dcol) = d.offset()?;
        let row = cell.row().checked_add_signed(drow)?;
        let col = cell.col().checked_add_signed(dcol)?;
        let nid = self.id_at(row, col)?;
        let ok = match filter {
            Connection::Any => true,
            Connection::NotConnected => cell.link(d).is_none(),
            Connection::LinkedThisWay => cell.link(d) == Some(nid),
            Connection::Symmetric => {
                cell.link(d) == Some(nid) && self.cells[nid].link(d.opposite()) == Some(id)
            }
        };
        ok.then_some(nid)
    }

    /// The neighbour cell itself; see [`neighbor_id`](Self::neighbor_id).
    pub fn neighbor(&self, id: CellId, d: Direction, filter: Connection) -> Option<&Cell<T>> {
        self.neighbor_id(id, d, filter).map(|n| &self.cells[n])
    }

    /// A uniformly chosen cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> &Cell<T> {
        &self.cells[rng.random_range(0..self.cells.len())]
    }

    // -----------------------------------------------------------------------
    // Links
    // -----------------------------------------------------------------------

    /// Link `a` to `b` through `a_to_b`, and `b` back to `a` as `b_to_a`
    /// says. `None` for `a_to_b` skips the forward half, which together
    /// with [`Backlink::None`] makes the call a no-op. Unknown ids are
    /// ignored.
    ///
    /// Nothing checks that the directions match the cells' positions.
    pub fn connect(&mut self, a: CellId, a_to_b: Option<Direction>, b: CellId, b_to_a: Backlink) {
        if a >= self.cells.len() || b >= self.cells.len() {
            return;
        }
        let back = match b_to_a {
            Backlink::None => None,
            Backlink::Toward(d) => Some(d),
            Backlink::Opposite => a_to_b.map(Direction::opposite),
        };
        if let Some(d) = a_to_b {
            self.cells[a].set_link(d, Some(b));
        }
        if let Some(d) = back {
            self.cells[b].set_link(d, Some(a));
        }
    }

    /// [`connect`](Self::connect) addressed by coordinates.
    pub fn connect_rc(
        &mut self,
        (r1, c1): (usize, usize),
        a_to_b: Option<Direction>,
        (r2, c2): (usize, usize),
        b_to_a: Backlink,
    ) {
        if let (Some(a), Some(b)) = (self.id_at(r1, c1), self.id_at(r2, c2)) {
            self.connect(a, a_to_b, b, b_to_a);
        }
    }

    /// Link `id` with its geometric neighbour in direction `d`, both ways.
    /// Returns the neighbour's id, or `None` when there is no neighbour.
    pub fn carve(&mut self, id: CellId, d: Direction) -> Option<CellId> {
        let n = self.neighbor_id(id, d, Connection::Any)?;
        self.connect(id, Some(d), n, Backlink::Opposite);
        Some(n)
    }

    /// Remove the outgoing link of `id` in direction `d`, returning the id it
    /// pointed to. The reverse link, if any, is kept.
    pub fn unlink(&mut self, id: CellId, d: Direction) -> Option<CellId> {
        let cell = self.cells.get_mut(id)?;
        let old = cell.link(d);
        cell.set_link(d, None);
        old
    }

    /// Direction in which `a` links to `b`; see [`Cell::connects_to`].
    pub fn is_connected(&self, a: CellId, b: CellId, heading: Heading) -> Option<Direction> {
        let (a, b) = (self.cell_by_id(a)?, self.cell_by_id(b)?);
        a.connects_to(b, heading)
    }

    /// [`is_connected`](Self::is_connected) addressed by coordinates.
    pub fn is_connected_rc(
        &self,
        (r1, c1): (usize, usize),
        (r2, c2): (usize, usize),
        heading: Heading,
    ) -> Option<Direction> {
        self.is_connected(self.id_at(r1, c1)?, self.id_at(r2, c2)?, heading)
    }

    /// Whether a player standing on `(row, col)` may step in direction `d`:
    /// the neighbour exists and this cell links to it.
    pub fn can_move(&self, row: usize, col: usize, d: Direction) -> bool {
        let Some(here) = self.id_at(row, col) else {
            return false;
        };
        self.neighbor_id(here, d, Connection::Any)
            .and_then(|there| self.is_connected(here, there, Heading::Any))
            .is_some()
    }

    /// Number of cardinal links that exist in both directions. For a
    /// spanning tree this is `len() - 1`.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| self.neighbor_id(c.id(), d, Connection::Symmetric).is_some())
                    .count()
            })
            .sum()
    }

    /// Grid borders touched by cell `id`.
    pub fn edge_status(&self, id: CellId) -> Option<Sides> {
        let c = self.cell_by_id(id)?;
        let mut edges = Sides::NONE;
        if c.row() == 0 {
            edges = edges | Sides::NORTH;
        }
        if c.col() == 0 {
            edges = edges | Sides::WEST;
        }
        if c.row() == self.rows - 1 {
            edges = edges | Sides::SOUTH;
        }
        if c.col() == self.cols - 1 {
            edges = edges | Sides::EAST;
        }
        Some(edges)
    }

    /// Cardinal sides of cell `id` without an outgoing link.
    pub fn wall_status(&self, id: CellId) -> Option<Sides> {
        self.cell_by_id(id).map(Cell::walls)
    }

    /// Label cell `id`; see [`Cell::set_label`].
    pub fn set_cell_label(&mut self, id: CellId, text: &str) -> Result<Relabel, LabelError> {
        self.cells
            .get_mut(id)
            .ok_or(LabelError::NoSuchCell(id))?
            .set_label(text)
    }

    /// Label the cell at `(row, col)`. A position off the grid reports
    /// [`LabelError::NoSuchCell`] with the id it would have had.
    pub fn set_cell_label_rc(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<Relabel, LabelError> {
        match self.id_at(row, col) {
            Some(id) => self.set_cell_label(id, text),
            None => Err(LabelError::NoSuchCell(
                row.saturating_mul(self.cols).saturating_add(col),
            )),
        }
    }

    // -----------------------------------------------------------------------
    // Visitors
    // -----------------------------------------------------------------------

    /// Call `f` on every cell in row-major order and sum the results. The
    /// sum saturates at the bounds of `i32`.
    ///
    /// The visitor gets the whole grid so it can link the cell to its
    /// neighbours.
    pub fn for_each(&mut self, mut f: impl FnMut(&mut Grid<T>, CellId) -> i32) -> i32 {
        let mut sum = 0;
        for id in 0..self.cells.len() {
            sum = f(self, id).saturating_add(sum);
        }
        sum
    }

    /// [`for_each`](Self::for_each) restricted to one row. `None` if the row
    /// is off the grid.
    pub fn for_each_in_row(
        &mut self,
        row: usize,
        mut f: impl FnMut(&mut Grid<T>, CellId) -> i32,
    ) -> Option<i32> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        let mut sum = 0;
        for id in start..start + self.cols {
            sum = f(self, id).saturating_add(sum);
        }
        Some(sum)
    }

    /// [`for_each`](Self::for_each) restricted to one column. `None` if the
    /// column is off the grid.
    pub fn for_each_in_col(
        &mut self,
        col: usize,
        mut f: impl FnMut(&mut Grid<T>, CellId) -> i32,
    ) -> Option<i32> {
        if col >= self.cols {
            return None;
        }
        let mut sum = 0;
        for row in 0..self.rows {
            sum = f(self, row * self.cols + col).saturating_add(sum);
        }
        Some(sum)
    }
}

// Deserialized grids must have the shape `Grid::new` builds.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct RawGrid<T> {
            rows: usize,
            cols: usize,
            planes: usize,
            kind: i32,
            label: Option<String>,
            cells: Vec<Cell<T>>,
        }

        let raw = RawGrid::<T>::deserialize(deserializer)?;
        let (rows, cols) = (raw.rows, raw.cols);
        if rows < 1 || cols < 1 {
            return Err(D::Error::custom(GridError::EmptyDimension { rows, cols }));
        }
        let len = raw.cells.len();
        if rows.checked_mul(cols) != Some(len) {
            return Err(D::Error::custom(format_args!(
                "grid: {rows}x{cols} grid holds {len} cells"
            )));
        }
        for (i, cell) in raw.cells.iter().enumerate() {
            if (cell.id(), cell.row(), cell.col()) != (i, i / cols, i % cols) {
                return Err(D::Error::custom(format_args!(
                    "grid: cell {i} is stored as id {} at ({}, {})",
                    cell.id(),
                    cell.row(),
                    cell.col()
                )));
            }
            if let Some(to) = cell.links().iter().flatten().find(|&&to| to >= len) {
                return Err(D::Error::custom(format_args!(
                    "grid: cell {i} links to missing cell {to}"
                )));
            }
        }
        Ok(Self {
            rows,
            cols,
            planes: raw.planes,
            kind: raw.kind,
            label: raw.label,
            cells: raw.cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols, 0).unwrap()
    }

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::<()>::new(0, 4, 0),
            Err(GridError::EmptyDimension { rows: 0, cols: 4 })
        );
        assert!(Grid::<()>::new(3, 0, 0).is_err());
    }

    #[test]
    fn new_lays_cells_out_row_major() {
        let g = grid(3, 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.planes(), 1);
        for (i, c) in g.cells().enumerate() {
            assert_eq!(c.id(), i);
            assert_eq!(c.id(), c.row() * 4 + c.col());
            assert_eq!(c.walls(), Sides::ALL);
        }
    }

    #[test]
    fn lookups_out_of_bounds() {
        let g = grid(3, 4);
        assert!(g.cell_at(2, 3).is_some());
        assert!(g.cell_at(3, 0).is_none());
        assert!(g.cell_at(0, 4).is_none());
        assert!(g.cell_by_id(11).is_some());
        assert!(g.cell_by_id(12).is_none());
    }

    #[test]
    fn neighbor_filters() {
        let mut g = grid(3, 3);
        // 4 -> 5 one way, 4 <-> 1 both ways.
        g.connect(4, Some(Direction::East), 5, Backlink::None);
        g.carve(4, Direction::North);

        assert_eq!(g.neighbor_id(4, Direction::East, Connection::Any), Some(5));
        assert_eq!(g.neighbor_id(4, Direction::East, Connection::LinkedThisWay), Some(5));
        assert_eq!(g.neighbor_id(4, Direction::East, Connection::Symmetric), None);
        assert_eq!(g.neighbor_id(4, Direction::East, Connection::NotConnected), None);

        assert_eq!(g.neighbor_id(4, Direction::North, Connection::Symmetric), Some(1));
        assert_eq!(g.neighbor_id(4, Direction::South, Connection::NotConnected), Some(7));
        assert_eq!(g.neighbor_id(4, Direction::West, Connection::LinkedThisWay), None);
    }

    #[test]
    fn neighbor_off_grid_is_none_for_every_filter() {
        let mut g = grid(2, 2);
        // A link that points off the geometric neighbour is still off-grid.
        g.connect(0, Some(Direction::North), 3, Backlink::None);
        for filter in [
            Connection::Any,
            Connection::NotConnected,
            Connection::LinkedThisWay,
            Connection::Symmetric,
        ] {
            assert!(g.neighbor(0, Direction::North, filter).is_none());
            assert!(g.neighbor(0, Direction::West, filter).is_none());
            assert!(g.neighbor(3, Direction::South, filter).is_none());
            assert!(g.neighbor(3, Direction::East, filter).is_none());
            assert!(g.neighbor(0, Direction::Up, filter).is_none());
        }
    }

    #[test]
    fn connect_one_way_and_explicit_backlink() {
        let mut g = grid(2, 2);
        g.connect(0, Some(Direction::East), 1, Backlink::None);
        assert_eq!(g.is_connected(0, 1, Heading::Any), Some(Direction::East));
        assert_eq!(g.is_connected(1, 0, Heading::Any), None);

        g.connect(2, None, 3, Backlink::Toward(Direction::West));
        assert_eq!(g.is_connected(2, 3, Heading::Any), None);
        assert_eq!(g.is_connected(3, 2, Heading::Toward(Direction::West)), Some(Direction::West));
        assert_eq!(g.is_connected(3, 2, Heading::Toward(Direction::North)), None);
    }

    #[test]
    fn connect_ignores_unknown_ids() {
        let mut g = grid(2, 2);
        let before = g.clone();
        g.connect(0, Some(Direction::East), 99, Backlink::Opposite);
        g.connect_rc((0, 0), Some(Direction::East), (5, 5), Backlink::Opposite);
        assert_eq!(g, before);
    }

    #[test]
    fn carve_links_both_ways() {
        let mut g = grid(2, 2);
        assert_eq!(g.carve(0, Direction::South), Some(2));
        assert_eq!(g.is_connected_rc((0, 0), (1, 0), Heading::Any), Some(Direction::South));
        assert_eq!(g.is_connected_rc((1, 0), (0, 0), Heading::Any), Some(Direction::North));
        assert_eq!(g.carve(0, Direction::North), None);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unlink_keeps_reverse() {
        let mut g = grid(1, 2);
        g.carve(0, Direction::East);
        assert_eq!(g.unlink(0, Direction::East), Some(1));
        assert_eq!(g.is_connected(0, 1, Heading::Any), None);
        assert_eq!(g.is_connected(1, 0, Heading::Any), Some(Direction::West));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn can_move_follows_outgoing_links() {
        let mut g = grid(2, 2);
        g.connect(0, Some(Direction::East), 1, Backlink::None);
        assert!(g.can_move(0, 0, Direction::East));
        assert!(!g.can_move(0, 1, Direction::West));
        assert!(!g.can_move(0, 0, Direction::North));
        assert!(!g.can_move(9, 9, Direction::South));
    }

    #[test]
    fn edge_and_wall_status() {
        let mut g = grid(3, 3);
        assert_eq!(g.edge_status(0), Some(Sides::NORTH | Sides::WEST));
        assert_eq!(g.edge_status(4), Some(Sides::NONE));
        assert_eq!(g.edge_status(8), Some(Sides::SOUTH | Sides::EAST));
        assert_eq!(g.edge_status(9), None);

        g.carve(4, Direction::West);
        assert_eq!(
            g.wall_status(4),
            Some(Sides::NORTH | Sides::EAST | Sides::SOUTH)
        );
        assert_eq!(g.wall_status(3), Some(Sides::NORTH | Sides::WEST | Sides::SOUTH));
        assert_eq!(g.wall_status(42), None);
    }

    #[test]
    fn labels_report_outcomes() {
        let mut g = grid(2, 2);
        assert_eq!(g.set_cell_label(0, "A"), Ok(Relabel::Fresh));
        assert_eq!(g.set_cell_label(0, "B"), Ok(Relabel::Replaced));
        assert_eq!(g.cell_by_id(0).and_then(Cell::label), Some("B"));
        assert_eq!(g.set_cell_label(4, "X"), Err(LabelError::NoSuchCell(4)));
        assert_eq!(g.set_cell_label_rc(1, 1, "D"), Ok(Relabel::Fresh));
        assert!(g.set_cell_label_rc(2, 0, "X").is_err());

        assert_eq!(g.set_label("maze"), Ok(Relabel::Fresh));
        assert_eq!(g.set_label("maze 2"), Ok(Relabel::Replaced));
        assert_eq!(g.label(), Some("maze 2"));
    }

    #[test]
    fn for_each_sums_and_orders() {
        let mut g = grid(2, 3);
        let mut seen = Vec::new();
        let sum = g.for_each(|_, id| {
            seen.push(id);
            1
        });
        assert_eq!(sum, 6);
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);

        seen.clear();
        assert_eq!(
            g.for_each_in_row(1, |_, id| {
                seen.push(id);
                2
            }),
            Some(6)
        );
        assert_eq!(seen, vec![3, 4, 5]);

        seen.clear();
        assert_eq!(
            g.for_each_in_col(2, |_, id| {
                seen.push(id);
                1
            }),
            Some(2)
        );
        assert_eq!(seen, vec![2, 5]);

        assert_eq!(g.for_each_in_row(2, |_, _| 1), None);
        assert_eq!(g.for_each_in_col(3, |_, _| 1), None);
    }

    #[test]
    fn for_each_sum_saturates() {
        let mut g = grid(2, 3);
        assert_eq!(g.for_each(|_, _| i32::MAX), i32::MAX);
        assert_eq!(g.for_each(|_, _| i32::MIN), i32::MIN);
        assert_eq!(g.for_each_in_row(1, |_, _| i32::MAX), Some(i32::MAX));
        assert_eq!(g.for_each_in_col(0, |_, _| i32::MIN), Some(i32::MIN));
    }

    #[test]
    fn for_each_visitor_can_link() {
        let mut g = grid(1, 4);
        let made = g.for_each(|g, id| i32::from(g.carve(id, Direction::East).is_some()));
        assert_eq!(made, 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn random_cell_stays_in_grid() {
        let g = grid(4, 5);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(g.random_cell(&mut rng).id() < g.len());
        }
    }
}
