//! Shifting bitboards across the board in the eight compass directions.
//!
//! North is toward row 0 (lower bit indices) and east is toward column H.
//! Horizontal and diagonal shifts clear the column a wrapped bit would land
//! on, so no disk ever moves from one edge of the board to the other.

use crate::bitboard::Bitboard;

/// Every column except A.
pub const NOT_A_FILE: u64 = 0xfefefefefefefefe;

/// Every column except H.
pub const NOT_H_FILE: u64 = 0x7f7f7f7f7f7f7f7f;

const FULL_MASK: u64 = 0xffffffffffffffff;

/// One of the eight compass directions a run of disks can extend in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, in the order they are scanned.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Signed change in cell index for one step in this direction.
    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            Direction::North => -8,
            Direction::South => 8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => -7,
            Direction::NorthWest => -9,
            Direction::SouthEast => 9,
            Direction::SouthWest => 7,
        }
    }

    /// Mask applied after shifting, clearing bits that wrapped around an edge.
    #[inline]
    pub const fn edge_mask(self) -> u64 {
        match self {
            Direction::North | Direction::South => FULL_MASK,
            Direction::East | Direction::NorthEast | Direction::SouthEast => NOT_A_FILE,
            Direction::West | Direction::NorthWest | Direction::SouthWest => NOT_H_FILE,
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

/// Move every disk in `disks` one cell in `direction`.
/// Disks that would leave the board are dropped.
#[inline]
pub fn shift(disks: Bitboard, direction: Direction) -> Bitboard {
    let bits = u64::from(disks);
    let delta = direction.delta();
    let shifted = if delta > 0 {
        bits << delta
    } else {
        bits >> -delta
    };

    Bitboard::from(shifted & direction.edge_mask())
}
