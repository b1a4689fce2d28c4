//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::{Bitboard, Indices};
use crate::error::BoardError;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGH";

/// A location on the Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a row-major cell index.
    #[inline]
    pub fn from_index(index: u8) -> Result<Self, BoardError> {
        Bitboard::from_index(index).map(Self)
    }

    /// Convert into a row-major cell index.
    #[inline]
    pub fn to_index(self) -> u8 {
        u64::from(self.0).trailing_zeros() as u8
    }

    /// Convert from row and column coordinates, with row 0 at the top.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return None;
        }
        Self::from_index((row * EDGE_LENGTH + col) as u8).ok()
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let col_str = COLUMN_LABELS.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", row + 1)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(self.0 & loc.0).is_empty()
    }

    /// Returns whether the list holds no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the locations, lowest cell index first.
    pub fn iter(self) -> LocationIter {
        LocationIter(self.0.indices())
    }
}

/// Iterator over the [`Location`]s of a [`LocationList`].
#[derive(Clone, Copy, Debug)]
pub struct LocationIter(Indices);

impl Iterator for LocationIter {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        self.0
            .next()
            .map(|index| Location(Bitboard::from(1u64 << index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for LocationIter {}

impl IntoIterator for LocationList {
    type Item = Location;
    type IntoIter = LocationIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Ok(Location(Bitboard::from(1u64))));
        assert_eq!(
            Location::from_index(63),
            Ok(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(
            Location::from_index(64),
            Err(BoardError::OutOfRangeIndex { index: 64 })
        );
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location(Bitboard::from(1u64)).to_index(), 0);
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_index(), 63);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Some(Location(Bitboard::from(1u64)))
        );
        assert_eq!(
            Location::from_coords(7, 7),
            Some(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(Bitboard::from(1u64 << 19)).to_coords(), (2, 3));
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_coords(), (7, 7));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(
            Location::from_str("A1"),
            Ok(Location(Bitboard::from(1u64)))
        );
        assert_eq!(
            Location::from_str("h8"),
            Ok(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(
            Location::from_str(" D3\n"),
            Location::from_coords(2, 3).ok_or(ParseLocationError)
        );
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1u64)).to_string(), "A1");
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("f6").unwrap().to_string(), "F6");
    }

    #[test]
    fn list_display_and_membership() {
        let moves = LocationList::from(Bitboard::from(0x0000102004080000u64));
        assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");
        assert_eq!(moves.iter().len(), 4);
        assert!(moves.contains(Location::from_str("C4").unwrap()));
        assert!(!moves.contains(Location::from_str("A1").unwrap()));
    }
}
