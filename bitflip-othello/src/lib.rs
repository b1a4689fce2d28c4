//! `bitflip-othello` is an Othello engine core built on bitboards.
//!
//! The package is layered:
//!
//!  - [`direction`] shifts whole bitboards one cell in a compass direction.
//!  - [`bitboard`] holds the move generator and move resolver, both as raw,
//!    unchecked operations for hot loops and as checked operations that report
//!    a [`BoardError`] instead of producing an inconsistent board.
//!  - [`Board`] is a validated pair of bitboards seen from the active player.
//!  - [`Game`] adds colors, passing and game-end detection on top of [`Board`].
//!
//! Cells are numbered in row-major order from the top-left: bit 0 is `A1`,
//! bit 7 is `H1` and bit 63 is `H8`. Row 0 is the northern edge.
//! The same operations are exported through a C ABI in [`ffi`].

pub mod bitboard;
pub mod direction;
pub mod ffi;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use bitboard::{Bitboard, BLACK_START, WHITE_START};
pub use board::*;
pub use direction::{shift, Direction};
pub use error::BoardError;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
