//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but for
//! performance you may use [`Board`] or the raw [`bitboard`](crate::bitboard)
//! operations directly.

use crate::board::Board;
use crate::error::BoardError;
use crate::location::{Location, LocationList, ParseLocationError};
use derive_more::Display;
use log::{debug, info};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// An action in an Othello game: pass or place a disk.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Move {
    #[display(fmt = "PASS")]
    Pass,
    #[display(fmt = "{}", _0)]
    Piece(Location),
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Piece(loc)
    }
}

/// Build a [`Move`] from a location ("D3") or "pass", ignoring case.
impl std::str::FromStr for Move {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Self::Pass);
        }
        s.parse().map(Self::Piece)
    }
}

/// Disk totals for each color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiskCounts {
    pub black: u8,
    pub white: u8,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
    pub just_passed: bool,
}

impl Default for Game {
    /// The starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::default(), Player::default())
    }
}

impl Game {
    /// Start a game from `board`, seen from `active_player`.
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
            just_passed: false,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves()
    }

    /// Make a move as the active player and hand the turn over.
    ///
    /// A placement must be legal, and a pass is only allowed when the active
    /// player has no placement available.
    pub fn apply_move(&self, mv: Move) -> Result<Self, BoardError> {
        let board = match mv {
            Move::Pass => {
                if !self.legal_moves().is_empty() {
                    debug!(
                        "{} may not pass: moves {}",
                        self.active_player,
                        self.legal_moves()
                    );
                    return Err(BoardError::IllegalPass);
                }
                self.board.pass()
            }
            Move::Piece(loc) => self.board.make_move(loc).map_err(|err| {
                debug!("{} rejected {}: {}", self.active_player, loc, err);
                err
            })?,
        };
        debug!("{} played {}", self.active_player, mv);

        let next = Self {
            board,
            active_player: !self.active_player,
            just_passed: mv == Move::Pass,
        };

        if next.is_finished() {
            info!("game over: {}", next.outcome_summary());
        }

        Ok(next)
    }

    /// The game ends when neither player can place a disk.
    pub fn is_finished(&self) -> bool {
        if !self.legal_moves().is_empty() {
            return false;
        }
        self.just_passed || self.board.pass().legal_moves().is_empty()
    }

    /// Count the disks of each color.
    pub fn disk_counts(&self) -> DiskCounts {
        let active = self.board.active().count_occupied();
        let opponent = self.board.opponent().count_occupied();
        match self.active_player {
            Player::Black => DiskCounts {
                black: active,
                white: opponent,
            },
            Player::White => DiskCounts {
                black: opponent,
                white: active,
            },
        }
    }

    /// The player with more disks, or None for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }

        let counts = self.disk_counts();
        match counts.black.cmp(&counts.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn outcome_summary(&self) -> String {
        let counts = self.disk_counts();
        match self.winner() {
            Some(player) => format!("{} wins {}-{}", player, counts.black, counts.white),
            None => format!("draw {}-{}", counts.black, counts.white),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.disk_counts();
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} to move (X). Black {}, White {}.",
            self.active_player, counts.black, counts.white
        )?;
        if self.just_passed {
            f.write_str(" (Last move was a pass)")?;
        }
        Ok(())
    }
}
