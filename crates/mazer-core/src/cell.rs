//! The [`Cell`] type: one grid position and its outgoing links.

use crate::direction::{DIRECTIONS, Direction};
use crate::label::{self, LabelError, Relabel};
use crate::sides::Sides;

/// Index of a cell in its grid: `row * cols + col`.
pub type CellId = usize;

/// Which direction(s) a connectivity test looks at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Only this direction.
    Toward(Direction),
    /// Every direction, first match wins.
    Any,
}

/// A grid position with one outgoing link slot per direction.
///
/// A link is directed: `a.link(East) == Some(b.id())` says nothing about
/// `b.link(West)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T = ()> {
    id: CellId,
    row: usize,
    col: usize,
    links: [Option<CellId>; DIRECTIONS],
    /// Free tag, e.g. a drawing hint. Initialised from the grid kind.
    pub kind: i32,
    label: Option<String>,
    /// Caller data; no algorithm here reads it.
    pub payload: Option<T>,
}

impl<T> Cell<T> {
    /// A disconnected cell.
    pub(crate) fn new(id: CellId, row: usize, col: usize, kind: i32) -> Self {
        Self {
            id,
            row,
            col,
            links: [None; DIRECTIONS],
            kind,
            label: None,
            payload: None,
        }
    }

    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Id of the cell linked in direction `d`, if any.
    #[inline]
    pub fn link(&self, d: Direction) -> Option<CellId> {
        self.links[d.index()]
    }

    /// The whole link table, in [`Direction::ALL`] order.
    #[inline]
    pub fn links(&self) -> &[Option<CellId>; DIRECTIONS] {
        &self.links
    }

    #[inline]
    pub(crate) fn set_link(&mut self, d: Direction, to: Option<CellId>) {
        self.links[d.index()] = to;
    }

    /// Direction in which this cell links to `other`, or `None` if it does
    /// not. With [`Heading::Any`] every slot is scanned in slot order.
    pub fn connects_to<U>(&self, other: &Cell<U>, heading: Heading) -> Option<Direction> {
        match heading {
            Heading::Toward(d) => (self.link(d) == Some(other.id)).then_some(d),
            Heading::Any => Direction::ALL
                .into_iter()
                .find(|&d| self.link(d) == Some(other.id)),
        }
    }

    /// Cardinal sides without an outgoing link.
    pub fn walls(&self) -> Sides {
        Direction::CARDINAL
            .into_iter()
            .filter(|&d| self.link(d).is_none())
            .fold(Sides::NONE, |acc, d| acc | Sides::of(d))
    }

    /// Number of outgoing links, counting every slot.
    pub fn link_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the label with a copy of `text` (bounded to
    /// [`MAX_LABEL_LEN`](crate::label::MAX_LABEL_LEN) bytes).
    pub fn set_label(&mut self, text: &str) -> Result<Relabel, LabelError> {
        label::replace(&mut self.label, text)
    }

    /// Drop the label, returning it.
    pub fn clear_label(&mut self) -> Option<String> {
        self.label.take()
    }
}
