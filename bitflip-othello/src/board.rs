//! A validated pair of bitboards seen from the player about to move.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::error::BoardError;
use crate::location::{Location, LocationList};
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The disks of the active player and of the opponent.
///
/// The two bitboards never share a cell: every constructor checks it, and
/// the only way to change a board is through the checked resolver.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    active: Bitboard,
    opponent: Bitboard,
}

impl Default for Board {
    /// The starting position, Black to move.
    fn default() -> Self {
        Self {
            active: BLACK_START,
            opponent: WHITE_START,
        }
    }
}

impl Board {
    /// Build a board from the active player's and the opponent's disks.
    pub fn new(active: Bitboard, opponent: Bitboard) -> Result<Self, BoardError> {
        let overlap = active & opponent;
        if !overlap.is_empty() {
            return Err(BoardError::InvalidOverlap {
                overlap: overlap.into(),
            });
        }
        Ok(Self { active, opponent })
    }

    #[inline]
    pub fn active(self) -> Bitboard {
        self.active
    }

    #[inline]
    pub fn opponent(self) -> Bitboard {
        self.opponent
    }

    /// Hand the move to the opponent without placing a disk.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            active: self.opponent,
            opponent: self.active,
        }
    }

    /// Get a mask of the legal moves for the active player.
    #[inline]
    pub fn move_mask(self) -> Bitboard {
        bitboard::get_move_mask(self.active, self.opponent)
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        LocationList::from(self.move_mask())
    }

    /// Place a disk for the active player on cell `index` and flip every
    /// captured disk. The active player stays the same.
    pub fn resolve(self, index: u8) -> Result<Self, BoardError> {
        let (active, opponent) = bitboard::resolve(self.active, self.opponent, index)?;
        Ok(Self { active, opponent })
    }

    /// Play `loc` for the active player, then hand the move to the opponent.
    pub fn make_move(self, loc: Location) -> Result<Self, BoardError> {
        self.resolve(loc.to_index()).map(Self::pass)
    }

    /// Like [`Board::make_move`], but trusts that `loc` is a legal move.
    /// An illegal `loc` leaves an inconsistent board.
    #[inline]
    pub fn make_move_unchecked(self, loc: Location) -> Self {
        let (active, opponent) = bitboard::apply_move(self.active, self.opponent, loc.into());
        Self {
            active: opponent,
            opponent: active,
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.active | self.opponent
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// Score a board as: # my pieces - # opponent pieces.
    #[inline]
    pub fn score_absolute_difference(self) -> i8 {
        self.active.count_occupied() as i8 - self.opponent.count_occupied() as i8
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |index| {
            if self.active.contains(index) {
                'X'
            } else if self.opponent.contains(index) {
                'O'
            } else {
                '.'
            }
        })
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unexpected cell character {:?}", found)]
    BadCell { found: char },
}

/// Parse a board from 64 cells in row-major order: `X` for the active player,
/// `O` for the opponent, and `-` or `.` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut active = 0u64;
        let mut opponent = 0u64;
        let mut found = 0;

        for cell in s.chars().filter(|c| !c.is_whitespace()) {
            if found < NUM_SPACES {
                match cell {
                    'X' | 'x' => active |= 1 << found,
                    'O' | 'o' => opponent |= 1 << found,
                    '-' | '.' => {}
                    _ => return Err(ParseBoardError::BadCell { found: cell }),
                }
            }
            found += 1;
        }

        if found != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found });
        }

        Ok(Self {
            active: active.into(),
            opponent: opponent.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const START: &str = "
        --------
        --------
        --------
        ---OX---
        ---XO---
        --------
        --------
        --------";

    #[test]
    fn parse_start() {
        assert_eq!(Board::from_str(START), Ok(Board::default()));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Board::from_str("XO"),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            Board::from_str(&"-".repeat(65)),
            Err(ParseBoardError::WrongLength { found: 65 })
        );
        assert_eq!(
            Board::from_str(&format!("Z{}", "-".repeat(63))),
            Err(ParseBoardError::BadCell { found: 'Z' })
        );
    }

    #[test]
    fn new_rejects_overlap() {
        assert_eq!(
            Board::new(BLACK_START, BLACK_START),
            Err(BoardError::InvalidOverlap {
                overlap: BLACK_START.into()
            })
        );
        assert_eq!(
            Board::new(BLACK_START, WHITE_START),
            Ok(Board::default())
        );
    }

    #[test]
    fn start_has_four_moves() {
        let moves = Board::default().legal_moves();
        assert_eq!(moves.iter().len(), 4);
        assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");
    }

    #[test]
    fn first_move_flips_one_disk() {
        let board = Board::default();
        let d3 = Location::from_str("D3").unwrap();
        let after = board.resolve(d3.to_index()).unwrap();

        let d4 = Location::from_str("D4").unwrap();
        let e5 = Location::from_str("E5").unwrap();
        let d4_mask: Bitboard = d4.into();
        let e5_mask: Bitboard = e5.into();

        // D4 changes hands, E5 stays with the opponent.
        assert!(!(board.opponent() & d4_mask).is_empty());
        assert!(!(after.active() & d4_mask).is_empty());
        assert!((after.opponent() & d4_mask).is_empty());
        assert_eq!(after.opponent(), e5_mask);
        assert_eq!(after.active().count_occupied(), 4);
        assert_eq!(after.score_absolute_difference(), 3);
    }

    #[test]
    fn make_move_swaps_perspective() {
        let board = Board::default();
        let c4 = Location::from_str("C4").unwrap();
        let after = board.make_move(c4).unwrap();
        assert_eq!(after.opponent().count_occupied(), 4);
        assert_eq!(after.active().count_occupied(), 1);
        assert_eq!(after, board.make_move_unchecked(c4));
    }

    #[test]
    fn illegal_move_leaves_no_board() {
        let a1 = Location::from_str("A1").unwrap();
        assert_eq!(
            Board::default().make_move(a1),
            Err(BoardError::IllegalMoveIndex { index: 0 })
        );
    }

    #[test]
    fn pass_twice_is_identity() {
        let board = Board::default();
        assert_eq!(board.pass().pass(), board);
        assert_eq!(board.pass().active(), WHITE_START);
    }

    #[test]
    fn display_marks_active_player() {
        let rendered = Board::default().to_string();
        assert!(rendered.contains(" 4 . . . O X . . . "));
        assert!(rendered.contains(" 5 . . . X O . . . "));
    }
}
