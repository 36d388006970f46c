//! Link directions: the four cardinal headings plus the reserved up/down
//! plane.

use std::fmt;

/// Number of link slots stored on every cell.
pub const DIRECTIONS: usize = 6;

/// A link direction.
///
/// The discriminants are the slot indices used in a cell's link table and
/// match the raw codes accepted by [`Direction::from_code`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    West = 1,
    East = 2,
    South = 3,
    /// Reserved for a second plane; no algorithm walks it.
    Up = 4,
    /// Reserved for a second plane; no algorithm walks it.
    Down = 5,
}

impl Direction {
    /// Every direction, in slot order.
    pub const ALL: [Direction; DIRECTIONS] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::Up,
        Direction::Down,
    ];

    /// The four in-plane directions, in slot order. Searches that visit
    /// neighbours use this order, which fixes their tie-breaking.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// Slot index of this direction in a cell's link table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode a raw direction code. Anything outside `0..6` is not a
    /// direction.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::North),
            1 => Some(Self::West),
            2 => Some(Self::East),
            3 => Some(Self::South),
            4 => Some(Self::Up),
            5 => Some(Self::Down),
            _ => None,
        }
    }

    /// The reverse heading: north/south, west/east and up/down pair up.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Row/column step `(drow, dcol)` of an in-plane direction, `None` for
    /// up/down.
    #[inline]
    pub const fn offset(self) -> Option<(isize, isize)> {
        match self {
            Self::North => Some((-1, 0)),
            Self::South => Some((1, 0)),
            Self::West => Some((0, -1)),
            Self::East => Some((0, 1)),
            Self::Up | Self::Down => None,
        }
    }

    /// Whether this is one of the four in-plane directions.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        self.offset().is_some()
    }

    /// Lower-case name, e.g. `"north"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::West => "west",
            Self::East => "east",
            Self::South => "south",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction> for i32 {
    fn from(d: Direction) -> Self {
        d as i32
    }
}

/// Opposite of a raw direction code; `None` when the code names no
/// direction.
pub fn opposite_code(code: i32) -> Option<i32> {
    Direction::from_code(code).map(|d| i32::from(d.opposite()))
}
