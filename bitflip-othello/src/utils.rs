//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Format the board as a labelled grid, asking `piece_at` for the
/// character to draw at each cell index.
pub fn format_grid<F: Fn(u8) -> char>(f: &mut Formatter, piece_at: F) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, "{} ", piece_at((row * EDGE_LENGTH + col) as u8))?;
        }
    }

    Ok(())
}
