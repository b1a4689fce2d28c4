//! Errors reported by the checked board operations.

use derive_more::{Display, Error};

/// Reasons a board operation was rejected.
///
/// Every checked operation validates its inputs before touching any bits,
/// so a returned error always means the caller's board is unchanged.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Both players claim at least one cell. `overlap` holds the shared cells.
    #[display(fmt = "disk masks overlap at {:#018x}", overlap)]
    InvalidOverlap { overlap: u64 },

    /// The cell is occupied, or placing there captures nothing.
    #[display(fmt = "cell {} is not a legal move", index)]
    IllegalMoveIndex { index: u8 },

    /// The cell index does not name a cell on the board.
    #[display(fmt = "cell index {} is outside the board", index)]
    OutOfRangeIndex { index: u8 },

    /// A pass was requested while the active player still has a legal move.
    #[display(fmt = "cannot pass while legal moves remain")]
    IllegalPass,
}
