//! Bitboards and the move generator and resolver built on them.
//!
//! [`get_move_mask`] and [`apply_move`] are unchecked: they assume the two
//! bitboards are disjoint and the move is legal, and produce an inconsistent
//! board otherwise. [`legal_moves`] and [`resolve`] validate their inputs first
//! and report a [`BoardError`] instead.
//!
//! Bit `i` is the cell at row `i / 8`, column `i % 8`, counted from the
//! top-left of the board.

use crate::direction::{shift, Direction};
use crate::error::BoardError;
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: E4 and D5.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Number of times a run of opponent disks is extended after its first cell.
/// A run between two disks on an 8-wide board holds at most 6 cells.
const RUN_EXTENSIONS: usize = 5;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |index| if self.contains(index) { '#' } else { '.' })
    }
}

impl Bitboard {
    /// A bitboard with no cells set.
    pub const EMPTY: Self = Bitboard(0);

    /// A bitboard with only the cell at `index` set.
    /// Returns [`BoardError::OutOfRangeIndex`] for indices past the last cell.
    #[inline]
    pub fn from_index(index: u8) -> Result<Self, BoardError> {
        if usize::from(index) >= NUM_SPACES {
            return Err(BoardError::OutOfRangeIndex { index });
        }
        Ok(Bitboard(1 << index))
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the cell at `index` is set. Indices past the board are never set.
    #[inline]
    pub fn contains(self, index: u8) -> bool {
        usize::from(index) < NUM_SPACES && self.0 & (1 << index) != 0
    }

    /// Iterate over the indices of the set cells, lowest first.
    #[inline]
    pub fn indices(self) -> Indices {
        Indices(self.0)
    }
}

/// Iterator over the set cell indices of a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Indices(u64);

impl Iterator for Indices {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}

/// Opponent disks forming an unbroken line from `start` in `direction`.
/// `start` itself is not part of the run.
#[inline]
fn run_from(start: Bitboard, opponent: Bitboard, direction: Direction) -> Bitboard {
    let mut run = shift(start, direction) & opponent;
    for _ in 0..RUN_EXTENSIONS {
        run |= shift(run, direction) & opponent;
    }
    run
}

/// Opponent disks captured by placing a disk on `move_mask`.
#[inline]
fn captures(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut captured = Bitboard::EMPTY;
    for direction in Direction::ALL {
        let run = run_from(move_mask, opponent, direction);

        // The run only flips if an existing disk of ours closes it off.
        if !(shift(run, direction) & active).is_empty() {
            captured |= run;
        }
    }
    captured
}

fn check_disjoint(active: Bitboard, opponent: Bitboard) -> Result<(), BoardError> {
    let overlap = active & opponent;
    if overlap.is_empty() {
        Ok(())
    } else {
        Err(BoardError::InvalidOverlap {
            overlap: overlap.into(),
        })
    }
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
/// Undefined behavior if the two masks overlap.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);

    let mut moves = Bitboard::EMPTY;
    for direction in Direction::ALL {
        let run = run_from(active, opponent, direction);
        moves |= shift(run, direction) & empties;
    }
    moves
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location. Undefined behavior if an invalid Othello board
/// or `move_mask` is provided; an illegal move places a disk without capturing.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flip_mask = captures(active, opponent, move_mask);

    let new_active = (active | move_mask) ^ flip_mask;
    let new_opponent = opponent ^ flip_mask;

    (new_active, new_opponent)
}

/// Checked [`get_move_mask`]: rejects overlapping bitboards.
pub fn legal_moves(active: Bitboard, opponent: Bitboard) -> Result<Bitboard, BoardError> {
    check_disjoint(active, opponent)?;
    Ok(get_move_mask(active, opponent))
}

/// Checked [`apply_move`] for the cell at `index`.
///
/// Fails with [`BoardError::OutOfRangeIndex`] before any shifting if `index` is
/// off the board, [`BoardError::InvalidOverlap`] if the bitboards overlap, and
/// [`BoardError::IllegalMoveIndex`] if the cell is occupied or captures nothing.
pub fn resolve(
    active: Bitboard,
    opponent: Bitboard,
    index: u8,
) -> Result<(Bitboard, Bitboard), BoardError> {
    let move_mask = Bitboard::from_index(index)?;
    check_disjoint(active, opponent)?;

    if !(move_mask & (active | opponent)).is_empty() {
        return Err(BoardError::IllegalMoveIndex { index });
    }

    let flip_mask = captures(active, opponent, move_mask);
    if flip_mask.is_empty() {
        return Err(BoardError::IllegalMoveIndex { index });
    }

    Ok(((active | move_mask) ^ flip_mask, opponent ^ flip_mask))
}
