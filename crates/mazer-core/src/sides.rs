//! [`Sides`]: a bitmask over the four cardinal sides of a cell, used for
//! border (edge) and wall queries.

use std::ops::{BitAnd, BitOr};

use crate::direction::Direction;

/// Bitmask of cardinal sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides(pub u8);

impl Sides {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const WEST: Self = Self(1 << 1);
    pub const EAST: Self = Self(1 << 2);
    pub const SOUTH: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// The bit for a direction; up/down have none.
    #[inline]
    pub const fn of(d: Direction) -> Self {
        match d {
            Direction::North => Self::NORTH,
            Direction::West => Self::WEST,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::Up | Direction::Down => Self::NONE,
        }
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the side facing `d` is set. Always false for up/down.
    #[inline]
    pub const fn has(self, d: Direction) -> bool {
        let bit = Self::of(d);
        bit.0 != 0 && self.contains(bit)
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of sides set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for Sides {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Sides {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
