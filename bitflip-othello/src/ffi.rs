//! C ABI over raw `u64` bitboards.
//!
//! Every entry point validates its inputs. Failures are reported through
//! [`FfiStatus`] instead of unwinding across the language boundary.

use crate::bitboard::{self, Bitboard};
use crate::direction::{shift, Direction};
use crate::error::BoardError;
use log::warn;

/// Outcome code for calls through the C ABI.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FfiStatus {
    Ok = 0,
    InvalidOverlap = 1,
    IllegalMoveIndex = 2,
    OutOfRangeIndex = 3,
    UnknownDirection = 4,
}

impl From<BoardError> for FfiStatus {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidOverlap { .. } => FfiStatus::InvalidOverlap,
            BoardError::OutOfRangeIndex { .. } => FfiStatus::OutOfRangeIndex,
            // Passing is a game-level action with no C entry point.
            BoardError::IllegalMoveIndex { .. } | BoardError::IllegalPass => {
                FfiStatus::IllegalMoveIndex
            }
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaskResult {
    pub status: FfiStatus,
    pub mask: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolveResult {
    pub status: FfiStatus,
    pub new_active_mask: u64,
    pub new_opponent_mask: u64,
}

/// Direction codes, in [`Direction::ALL`] order: N, S, E, W, NE, NW, SE, SW.
fn direction_from_code(code: u8) -> Option<Direction> {
    Direction::ALL.get(usize::from(code)).copied()
}

#[no_mangle]
pub extern "C" fn bitflip_shift(disks: u64, direction: u8) -> MaskResult {
    match direction_from_code(direction) {
        Some(direction) => MaskResult {
            status: FfiStatus::Ok,
            mask: shift(Bitboard::from(disks), direction).into(),
        },
        None => {
            warn!("bitflip_shift: unknown direction code {}", direction);
            MaskResult {
                status: FfiStatus::UnknownDirection,
                mask: 0,
            }
        }
    }
}

#[no_mangle]
pub extern "C" fn bitflip_legal_moves(active_mask: u64, opponent_mask: u64) -> MaskResult {
    match bitboard::legal_moves(active_mask.into(), opponent_mask.into()) {
        Ok(moves) => MaskResult {
            status: FfiStatus::Ok,
            mask: moves.into(),
        },
        Err(err) => {
            warn!("bitflip_legal_moves: {}", err);
            MaskResult {
                status: err.into(),
                mask: 0,
            }
        }
    }
}

/// On failure the input masks are echoed back unchanged.
#[no_mangle]
pub extern "C" fn bitflip_resolve(
    active_mask: u64,
    opponent_mask: u64,
    index: u8,
) -> ResolveResult {
    match bitboard::resolve(active_mask.into(), opponent_mask.into(), index) {
        Ok((new_active, new_opponent)) => ResolveResult {
            status: FfiStatus::Ok,
            new_active_mask: new_active.into(),
            new_opponent_mask: new_opponent.into(),
        },
        Err(err) => {
            warn!("bitflip_resolve: {}", err);
            ResolveResult {
                status: err.into(),
                new_active_mask: active_mask,
                new_opponent_mask: opponent_mask,
            }
        }
    }
}
